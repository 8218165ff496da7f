//! Pure comparison of an old and a new document.
//!
//! [`compare_documents`] composes the pipeline stages that need no I/O:
//! canonicalize the new document, index both documents, diff the record sets
//! and summarize the result.

use crate::canonical::canonicalize;
use crate::diff::engine::compute_changes;
use crate::diff::model::ChangeRecord;
use crate::index::index_by_key;
use crate::report::summary::{summarize, DiffSummary};
use serde_json::Value;

/// Everything a comparison produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Canonical form of the new document (what gets persisted)
    pub canonical: Value,
    /// Number of indexable records in the old document
    pub old_records: usize,
    /// Number of indexable records in the new document
    pub new_records: usize,
    pub changes: Vec<ChangeRecord>,
    pub summary: DiffSummary,
}

/// Compare `old_doc` against `new_doc`, keyed by `key_field`.
///
/// The old document is indexed as-is; the new one is canonicalized first.
pub fn compare_documents(old_doc: &Value, new_doc: &Value, key_field: &str) -> Comparison {
    let canonical = canonicalize(new_doc);
    let old_set = index_by_key(old_doc, key_field);
    let new_set = index_by_key(&canonical, key_field);
    let changes = compute_changes(&old_set, &new_set);
    let summary = summarize(&changes);

    Comparison {
        canonical,
        old_records: old_set.len(),
        new_records: new_set.len(),
        changes,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DEFAULT_KEY_FIELD;
    use serde_json::json;

    #[test]
    fn test_first_run_everything_added() {
        let new_doc = json!({"data": [{"branch_code": "B", "name": "b"}, {"branch_code": "A"}]});
        let result = compare_documents(&json!({}), &new_doc, DEFAULT_KEY_FIELD);
        assert_eq!(result.old_records, 0);
        assert_eq!(result.new_records, 2);
        assert_eq!(result.summary.added_branches, 2);
        assert_eq!(result.changes.len(), 2);
    }

    #[test]
    fn test_rerun_on_canonical_output_is_clean() {
        let new_doc = json!({"data": [
            {"name": "b", "branch_code": "B", "tags": ["y", "x"]},
            {"branch_code": "A", "coords": ["30.1", "31.2"]}
        ]});
        let first = compare_documents(&json!({}), &new_doc, DEFAULT_KEY_FIELD);
        let second = compare_documents(&first.canonical, &new_doc, DEFAULT_KEY_FIELD);
        assert!(second.changes.is_empty());
        assert!(second.summary.is_empty());
        assert_eq!(second.canonical, first.canonical);
    }

    #[test]
    fn test_unsorted_array_in_old_snapshot_reported_against_canonical_new() {
        let old_doc = json!([{"branch_code": "A", "tags": ["y", "x"]}]);
        let new_doc = json!([{"branch_code": "A", "tags": ["y", "x"]}]);
        let result = compare_documents(&old_doc, &new_doc, DEFAULT_KEY_FIELD);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].field_path(), Some("tags"));
    }
}
