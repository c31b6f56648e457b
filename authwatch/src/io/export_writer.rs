//! Export writing.
//!
//! Serializes the run's export document to the format selected by the
//! output file's extension. An unsupported extension is reported to the
//! operator; the run continues without an export.

use std::path::Path;

use authwatch_analyzer::ExportDocument;
use authwatch_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors from export writing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format \"{extension}\"; use .json or .txt")]
    UnsupportedFormat { extension: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Write the export document to `path`, format chosen by extension.
pub fn write_export<F: Filesystem>(
    fs: &F,
    path: &Path,
    doc: &ExportDocument,
) -> Result<(), ExportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string();

    let content = match extension.as_str() {
        "json" => doc.to_json(),
        "txt" => doc.to_text(),
        _ => return Err(ExportError::UnsupportedFormat { extension }),
    };

    fs.write_atomic(path, content.as_bytes())
        .map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })
}
