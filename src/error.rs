use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong between launching the test executable and
/// closing the plot window.  None of these are recoverable: each one aborts
/// the run with a readable message and a non-zero exit.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The test executable is missing or not runnable.
    #[error("could not run '{}': {source}", path.display())]
    ProcessNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The captured output could not be read as CSV records.
    #[error("reading test output as CSV: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// A field was not a valid floating-point literal.
    #[error("line {line}: '{field}' is not a number")]
    InvalidField { line: usize, field: String },

    /// A row had fewer than the two fields the scatterplot needs.
    #[error("line {line}: expected at least 2 fields, got {fields}")]
    ShortRow { line: usize, fields: usize },

    /// The display backend could not open a window.
    #[error("opening the plot window: {source}")]
    Render {
        #[source]
        source: eframe::Error,
    },
}
