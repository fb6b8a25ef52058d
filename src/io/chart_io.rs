use std::path::{Path, PathBuf};

use crate::error::LeslieError;

/// Where a rendered chart ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutput {
    /// Written to this file.
    Saved(PathBuf),
    /// Could not be written; the terminal chart was printed instead.
    Displayed,
}

/// Write a rendered chart, creating the containing directory first.
pub fn save_chart(chart: &str, path: impl AsRef<Path>) -> Result<(), LeslieError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, chart)?;
    Ok(())
}

/// Save the chart, or print `fallback` to the terminal if saving fails.
/// Write failures are logged, never returned.
pub fn save_or_display(chart: &str, fallback: &str, path: impl AsRef<Path>) -> ChartOutput {
    let path = path.as_ref();
    match save_chart(chart, path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "chart saved");
            ChartOutput::Saved(path.to_path_buf())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not save chart, showing it instead");
            print!("{fallback}");
            ChartOutput::Displayed
        }
    }
}
