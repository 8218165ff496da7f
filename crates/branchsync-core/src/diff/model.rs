//! Change record types.

use serde::{Deserialize, Serialize};

/// Placeholder new value for a field that only exists in the old record.
pub const FIELD_REMOVED: &str = "<FIELD_REMOVED>";

/// Placeholder old value for a field that only exists in the new record.
pub const FIELD_ADDED: &str = "<FIELD_ADDED>";

/// Maximum length, in characters, of an Added/Deleted record summary.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Classification of a change record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    /// Key present only in the new record set
    Added,
    /// Key present only in the old record set
    Deleted,
    /// Key present in both with at least one differing field
    Modified,
}

impl ChangeType {
    /// Label used in the change report
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Deleted => "Deleted",
            ChangeType::Modified => "Modified",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected difference between two record sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "change_type")]
pub enum ChangeRecord {
    /// A record that only exists in the new set
    Added {
        key: String,
        /// Truncated JSON text of the new record
        summary: String,
    },
    /// A record that only exists in the old set
    Deleted {
        key: String,
        /// Truncated JSON text of the old record
        summary: String,
    },
    /// One differing field of a record present in both sets
    Modified {
        key: String,
        /// `field` or `field.nested_field`
        field_path: String,
        old_value: String,
        new_value: String,
    },
}

impl ChangeRecord {
    pub fn change_type(&self) -> ChangeType {
        match self {
            ChangeRecord::Added { .. } => ChangeType::Added,
            ChangeRecord::Deleted { .. } => ChangeType::Deleted,
            ChangeRecord::Modified { .. } => ChangeType::Modified,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ChangeRecord::Added { key, .. }
            | ChangeRecord::Deleted { key, .. }
            | ChangeRecord::Modified { key, .. } => key,
        }
    }

    /// Field path of a Modified record; `None` for Added/Deleted.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            ChangeRecord::Modified { field_path, .. } => Some(field_path),
            _ => None,
        }
    }
}
