//! Error handling for branchsync-store
//!
//! Wraps branchsync-core ExError with store-specific helpers

use branchsync_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path)
        .with_message(err.to_string())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error from a CSV writer failure
pub fn csv_error(operation: &str, err: csv::Error) -> ExError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ExError::new(ExErrorKind::Io)
            .with_op(operation.to_string())
            .with_message(io.to_string()),
        other => serialization_error(operation, format!("{:?}", other)),
    }
}
