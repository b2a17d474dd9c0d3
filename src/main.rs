mod app;
mod color;
mod data;
mod error;
mod runner;
mod state;
mod ui;

use std::path::Path;

use app::TimelineApp;
use eframe::egui;
use error::ViewerError;
use state::AppState;

/// Path of the external test executable, relative to the working directory.
const TEST_EXECUTABLE: &str = "./build/timeline_test";

fn main() -> Result<(), ViewerError> {
    env_logger::init();

    // Run → parse → render, strictly in that order.  Any failure aborts
    // before a window is opened, so a partial plot is never shown.
    let captured = runner::run_capture(Path::new(TEST_EXECUTABLE))?;
    let dataset = data::parser::parse_rows(&captured.stdout)?;
    log::info!("plotting {} samples", dataset.len());

    let state = AppState::new(dataset, TEST_EXECUTABLE.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Timeline Test Results",
        options,
        Box::new(|_cc| Ok(Box::new(TimelineApp::new(state)))),
    )
    .map_err(|source| ViewerError::Render { source })?;

    Ok(())
}
