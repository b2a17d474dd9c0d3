use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatterplot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatterplot of the test results.
///
/// One point per sample at (values[0], values[1]); extra fields on a row are
/// ignored.  Point color follows the sample's position in the output, low
/// indices dark, high indices bright.  An empty dataset is just an empty
/// plot.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    Plot::new("timeline_scatter")
        .x_axis_label("X")
        .y_axis_label("Y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, sample) in state.dataset.samples.iter().enumerate() {
                let point: PlotPoints = vec![[sample.x(), sample.y()]].into();
                plot_ui.points(
                    Points::new(point)
                        .color(state.color_map.color_for(idx))
                        .radius(3.0),
                );
            }
        });
}
