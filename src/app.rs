use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TimelineApp {
    pub state: AppState,
}

impl TimelineApp {
    pub fn new(state: AppState) -> Self {
        TimelineApp { state }
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: run summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Right side panel: index colorbar ----
        egui::SidePanel::right("colorbar_panel")
            .exact_width(90.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::colorbar_panel(ui, &self.state);
            });

        // ---- Central panel: scatterplot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });
    }
}
