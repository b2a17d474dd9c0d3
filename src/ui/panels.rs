use eframe::egui::{self, Rect, Sense, Ui, pos2, vec2};

use crate::color::viridis;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: where the data came from and how much of it
/// there is.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Timeline Test Results");
        ui.separator();
        ui.label(format!("{} samples", state.dataset.len()));
        ui.separator();
        ui.label(format!("source: {}", state.source));
    });
}

// ---------------------------------------------------------------------------
// Colorbar (right panel)
// ---------------------------------------------------------------------------

const BAR_WIDTH: f32 = 22.0;
const GRADIENT_BANDS: usize = 64;

/// Render the index colorbar: a vertical viridis gradient with the highest
/// index at the top and 0 at the bottom.  Hidden when there is nothing to
/// color.
pub fn colorbar_panel(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong("Index");
    });
    ui.add_space(4.0);

    if state.dataset.is_empty() {
        ui.label("–");
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(format!("{}", state.color_map.max_index()));

        let height = (ui.available_height() - 30.0).max(40.0);
        let (response, painter) =
            ui.allocate_painter(vec2(BAR_WIDTH, height), Sense::hover());
        let rect = response.rect;

        let band_height = rect.height() / GRADIENT_BANDS as f32;
        for band in 0..GRADIENT_BANDS {
            // Band 0 sits at the top of the strip and gets t = 1.
            let t = 1.0 - (band as f64 + 0.5) / GRADIENT_BANDS as f64;
            let top = rect.top() + band as f32 * band_height;
            let band_rect = Rect::from_min_size(
                pos2(rect.left(), top),
                vec2(rect.width(), band_height + 0.5),
            );
            painter.rect_filled(band_rect, 0.0, viridis(t));
        }
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            egui::StrokeKind::Outside,
        );

        ui.label("0");
    });
}
