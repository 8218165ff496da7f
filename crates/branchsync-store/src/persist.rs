//! Snapshot persistence operations.
//!
//! Writes the canonical document as pretty JSON (2-space indent, non-ASCII
//! verbatim, no trailing newline), copies the previous snapshot aside and
//! records fatal errors in a plain-text log.

use crate::atomic::atomic_write;
use crate::errors::{io_error, serialization_error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Pretty JSON text of a document.
///
/// # Errors
///
/// Returns a `Serialization` error if JSON serialization fails.
pub fn to_pretty_json(doc: &Value) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(|e| serialization_error("to_pretty_json", e))
}

/// Atomically write a document as pretty JSON.
///
/// # Errors
///
/// - `ExErrorKind::Serialization`: JSON serialization failed
/// - `ExErrorKind::Io`: the file could not be written
pub fn write_document_pretty(path: &Path, doc: &Value) -> Result<()> {
    let text = to_pretty_json(doc)?;
    atomic_write(path, text.as_bytes())?;

    tracing::debug!(
        path = %path.display(),
        size_bytes = text.len(),
        "Wrote document"
    );

    Ok(())
}

/// Copy `source` to `dest`, overwriting any previous backup.
///
/// # Errors
///
/// Returns an `Io` error if the copy fails.
pub fn backup_file(source: &Path, dest: &Path) -> Result<u64> {
    let bytes = fs::copy(source, dest).map_err(|e| io_error("backup_file", source, e))?;
    tracing::debug!(
        source = %source.display(),
        dest = %dest.display(),
        bytes,
        "Backed up file"
    );
    Ok(bytes)
}

/// Content of an error log entry.
pub fn error_log_text(timestamp: &str, message: &str) -> String {
    format!("Timestamp: {}\nError: {}\n", timestamp, message)
}

/// Write the error log of a failed run.
///
/// `timestamp` is the human-readable time (`YYYY-mm-dd HH:MM:SS`).
///
/// # Errors
///
/// Returns an `Io` error if the log cannot be written.
pub fn write_error_log(path: &Path, timestamp: &str, message: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("write_error_log", parent, e))?;
    }
    fs::write(path, error_log_text(timestamp, message))
        .map_err(|e| io_error("write_error_log", path, e))
}
