use crate::core::catalog::{Catalog, LoadError};
use crate::core::selection::Selection;
use std::path::{Path, PathBuf};

/// Default file name for an exported selection.
pub const EXPORT_FILE_NAME: &str = "my_courses.csv";

/// Content type of the export.
pub const EXPORT_MIME: &str = "text/csv";

/// Errors that can occur while exporting a selection.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Write the selection to `path` as UTF-8 CSV. Returns the number of course
/// rows written (header excluded).
pub fn write_export(path: &Path, selection: &Selection) -> Result<usize, ExportError> {
    let text = selection.to_export_format()?;
    std::fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = selection.len(),
        mime = EXPORT_MIME,
        "Selection exported"
    );
    Ok(selection.len())
}

/// Read a previously exported selection. Uses the catalog loader, so any
/// table with the display columns is accepted.
pub fn read_export(path: &Path) -> Result<Catalog, LoadError> {
    Catalog::load(path)
}
