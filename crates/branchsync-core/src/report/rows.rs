//! Flat tabular rendering of change records.

use crate::diff::model::ChangeRecord;
use serde::Serialize;

/// Column headers of the change report. The second column is named after the
/// key field, so it is supplied by the caller.
pub const REPORT_COLUMNS: [&str; 4] = ["ChangeType", "FieldName", "OldValue", "NewValue"];

/// One row of the change report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    pub change_type: &'static str,
    pub key: String,
    pub field_name: String,
    pub old_value: String,
    pub new_value: String,
}

impl ReportRow {
    /// Row cells in column order: ChangeType, key, FieldName, OldValue, NewValue
    pub fn cells(&self) -> [&str; 5] {
        [
            self.change_type,
            self.key.as_str(),
            self.field_name.as_str(),
            self.old_value.as_str(),
            self.new_value.as_str(),
        ]
    }

    /// Header cells for a report keyed by `key_field`
    pub fn header(key_field: &str) -> [&str; 5] {
        [
            REPORT_COLUMNS[0],
            key_field,
            REPORT_COLUMNS[1],
            REPORT_COLUMNS[2],
            REPORT_COLUMNS[3],
        ]
    }
}

impl From<&ChangeRecord> for ReportRow {
    fn from(change: &ChangeRecord) -> Self {
        let change_type = change.change_type().as_str();
        match change {
            ChangeRecord::Added { key, summary } => ReportRow {
                change_type,
                key: key.clone(),
                field_name: String::new(),
                old_value: String::new(),
                new_value: summary.clone(),
            },
            ChangeRecord::Deleted { key, summary } => ReportRow {
                change_type,
                key: key.clone(),
                field_name: String::new(),
                old_value: summary.clone(),
                new_value: String::new(),
            },
            ChangeRecord::Modified {
                key,
                field_path,
                old_value,
                new_value,
            } => ReportRow {
                change_type,
                key: key.clone(),
                field_name: field_path.clone(),
                old_value: old_value.clone(),
                new_value: new_value.clone(),
            },
        }
    }
}

/// Flatten change records into report rows, preserving order.
pub fn to_report_rows(changes: &[ChangeRecord]) -> Vec<ReportRow> {
    changes.iter().map(ReportRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_row_carries_summary_in_new_value() {
        let rows = to_report_rows(&[ChangeRecord::Added {
            key: "X1".to_string(),
            summary: "{...}".to_string(),
        }]);
        assert_eq!(rows[0].cells(), ["Added", "X1", "", "", "{...}"]);
    }

    #[test]
    fn test_deleted_row_carries_summary_in_old_value() {
        let rows = to_report_rows(&[ChangeRecord::Deleted {
            key: "X1".to_string(),
            summary: "{...}".to_string(),
        }]);
        assert_eq!(rows[0].cells(), ["Deleted", "X1", "", "{...}", ""]);
    }

    #[test]
    fn test_modified_row() {
        let rows = to_report_rows(&[ChangeRecord::Modified {
            key: "X1".to_string(),
            field_path: "phone".to_string(),
            old_value: "123".to_string(),
            new_value: "<FIELD_REMOVED>".to_string(),
        }]);
        assert_eq!(
            rows[0].cells(),
            ["Modified", "X1", "phone", "123", "<FIELD_REMOVED>"]
        );
    }

    #[test]
    fn test_header_uses_key_field() {
        assert_eq!(
            ReportRow::header("branch_code"),
            ["ChangeType", "branch_code", "FieldName", "OldValue", "NewValue"]
        );
    }
}
