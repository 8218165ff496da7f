//! Document loading.
//!
//! [`load_document`] reports *why* a file is unusable (missing, malformed or
//! unreadable). The two wrappers apply the run policy: the new-data file must
//! load, while an unusable old snapshot degrades to an empty document.

use crate::errors::Result;
use branchsync_core::errors::{ExError, LoadError};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// How the old snapshot was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OldState {
    /// Parsed from disk
    Loaded,
    /// No file at the path; an empty document stands in
    Missing,
    /// The file is not valid JSON; an empty document stands in
    Malformed,
}

/// The old snapshot together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct OldSnapshot {
    pub document: Value,
    pub state: OldState,
}

impl OldSnapshot {
    fn empty(state: OldState) -> Self {
        Self {
            document: Value::Object(Map::new()),
            state,
        }
    }

    /// True when the file existed and parsed (and may therefore be backed up)
    pub fn is_loaded(&self) -> bool {
        self.state == OldState::Loaded
    }
}

/// Read and parse a JSON document.
///
/// # Errors
///
/// - [`LoadError::Missing`] when nothing exists at `path`
/// - [`LoadError::Malformed`] when the content is not valid UTF-8 JSON
/// - [`LoadError::Io`] for any other read failure
pub fn load_document(path: &Path) -> std::result::Result<Value, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoadError::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the new-data document. Any failure is fatal.
///
/// # Errors
///
/// `MissingInput`, `MalformedInput` or `Io`, carrying the path.
pub fn load_new_document(path: &Path) -> Result<Value> {
    let doc = load_document(path).map_err(|e| ExError::from(e).with_op("load_new_document"))?;
    tracing::debug!(path = %path.display(), "loaded new document");
    Ok(doc)
}

/// Load the old snapshot, substituting `{}` when it is missing or malformed.
///
/// # Errors
///
/// Only an unreadable existing file (permissions, a directory at the path)
/// is an error.
pub fn load_old_document(path: &Path) -> Result<OldSnapshot> {
    match load_document(path) {
        Ok(document) => {
            tracing::debug!(path = %path.display(), "loaded old snapshot");
            Ok(OldSnapshot {
                document,
                state: OldState::Loaded,
            })
        }
        Err(LoadError::Missing { .. }) => {
            tracing::warn!(
                path = %path.display(),
                "target file not found, a new file will be created"
            );
            Ok(OldSnapshot::empty(OldState::Missing))
        }
        Err(LoadError::Malformed { source, .. }) => {
            tracing::warn!(
                path = %path.display(),
                error = %source,
                "target file contains invalid JSON, a new file will be created"
            );
            Ok(OldSnapshot::empty(OldState::Malformed))
        }
        Err(err @ LoadError::Io { .. }) => Err(ExError::from(err).with_op("load_old_document")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchsync_core::errors::ExErrorKind;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, r#"{"data": [{"branch_code": "A"}]}"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({"data": [{"branch_code": "A"}]}));
    }

    #[test]
    fn test_missing_vs_malformed() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let malformed = dir.path().join("bad.json");
        fs::write(&malformed, "{not json").unwrap();

        assert!(matches!(
            load_document(&missing),
            Err(LoadError::Missing { .. })
        ));
        assert!(matches!(
            load_document(&malformed),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.json");
        fs::write(&path, [b'"', 0xE9, b'"']).unwrap();
        assert!(matches!(
            load_document(&path),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_new_document_missing_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = load_new_document(&dir.path().join("Centers_Raw.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingInput);
        assert_eq!(err.op(), Some("load_new_document"));
    }

    #[test]
    fn test_new_document_malformed_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Centers_Raw.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = load_new_document(&path).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MalformedInput);
    }

    #[test]
    fn test_old_document_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let missing = load_old_document(&dir.path().join("none.json")).unwrap();
        assert_eq!(missing.state, OldState::Missing);
        assert_eq!(missing.document, json!({}));
        assert!(!missing.is_loaded());

        let path = dir.path().join("bad.json");
        fs::write(&path, "oops").unwrap();
        let malformed = load_old_document(&path).unwrap();
        assert_eq!(malformed.state, OldState::Malformed);
        assert_eq!(malformed.document, json!({}));
    }

    #[test]
    fn test_old_document_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_old_document(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
