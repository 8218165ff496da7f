//! Change counts.

use crate::diff::model::{ChangeRecord, ChangeType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Counts over a change list.
///
/// Branch counts are distinct keys per category; a key with several modified
/// fields counts once in `modified_branches` and once per field in
/// `modified_fields`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSummary {
    pub added_branches: usize,
    pub deleted_branches: usize,
    pub modified_branches: usize,
    pub modified_fields: usize,
}

impl DiffSummary {
    /// True when no change of any kind was found
    pub fn is_empty(&self) -> bool {
        self.added_branches == 0 && self.deleted_branches == 0 && self.modified_fields == 0
    }
}

/// Aggregate a change list into a [`DiffSummary`].
pub fn summarize(changes: &[ChangeRecord]) -> DiffSummary {
    let distinct = |wanted: ChangeType| -> usize {
        changes
            .iter()
            .filter(|c| c.change_type() == wanted)
            .map(ChangeRecord::key)
            .collect::<BTreeSet<&str>>()
            .len()
    };

    DiffSummary {
        added_branches: distinct(ChangeType::Added),
        deleted_branches: distinct(ChangeType::Deleted),
        modified_branches: distinct(ChangeType::Modified),
        modified_fields: changes
            .iter()
            .filter(|c| c.change_type() == ChangeType::Modified)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modified(key: &str, field: &str) -> ChangeRecord {
        ChangeRecord::Modified {
            key: key.to_string(),
            field_path: field.to_string(),
            old_value: "a".to_string(),
            new_value: "b".to_string(),
        }
    }

    #[test]
    fn test_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, DiffSummary::default());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_modified_branches_counted_once() {
        let changes = vec![
            modified("X1", "name"),
            modified("X1", "phone"),
            modified("X2", "address.city"),
            ChangeRecord::Added {
                key: "X3".to_string(),
                summary: String::new(),
            },
            ChangeRecord::Deleted {
                key: "X4".to_string(),
                summary: String::new(),
            },
            ChangeRecord::Deleted {
                key: "X5".to_string(),
                summary: String::new(),
            },
        ];
        let summary = summarize(&changes);
        assert_eq!(
            summary,
            DiffSummary {
                added_branches: 1,
                deleted_branches: 2,
                modified_branches: 2,
                modified_fields: 3,
            }
        );
        assert!(!summary.is_empty());
    }
}
