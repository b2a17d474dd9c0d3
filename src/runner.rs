use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// External process runner
// ---------------------------------------------------------------------------

/// Everything captured from one run of the test executable.
#[derive(Debug)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub status: std::process::ExitStatus,
}

/// Run the executable at `path` with no arguments, wait for it to exit and
/// capture both output streams.
///
/// The exit status is deliberately not treated as an error: the historical
/// behavior of this tool is to trust whatever the executable printed.  A
/// non-zero status is logged as a warning together with the captured stderr
/// so a crashing test run is at least visible.
pub fn run_capture(path: &Path) -> Result<CapturedOutput, ViewerError> {
    log::info!("running {}", path.display());

    let output = Command::new(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| ViewerError::ProcessNotFound {
            path: path.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        log::warn!(
            "{} exited with {}; its output is used anyway. stderr:\n{}",
            path.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    } else if !output.stderr.is_empty() {
        log::debug!(
            "{} stderr:\n{}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }

    Ok(CapturedOutput {
        stdout: output.stdout,
        stderr: output.stderr,
        status: output.status,
    })
}
