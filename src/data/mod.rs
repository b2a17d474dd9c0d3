/// Data layer: core types and output parsing.
///
/// Architecture:
/// ```text
///  timeline_test stdout (bytes)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  CSV lines → numeric rows
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ TimelineDataset │  Vec<Sample>, output order = color index
///   └────────────────┘
/// ```

pub mod model;
pub mod parser;
