use crate::color::IndexColorMap;
use crate::data::model::TimelineDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the viewer window needs, built once before the window opens.
/// The dataset is fully parsed up front, so failures never reach the UI and
/// the state never changes while the window is up.
pub struct AppState {
    /// Parsed samples in output order.
    pub dataset: TimelineDataset,

    /// Row index → viridis color.
    pub color_map: IndexColorMap,

    /// Command the data came from, shown in the top bar.
    pub source: String,
}

impl AppState {
    pub fn new(dataset: TimelineDataset, source: String) -> Self {
        let color_map = IndexColorMap::new(dataset.len());
        AppState {
            dataset,
            color_map,
            source,
        }
    }
}
