//! Record set diff computation.
//!
//! The entry point is [`compute_changes`]. Records present under the same key
//! in both sets are compared field by field:
//!
//! - both values objects: compared one level deep, nested key by nested key;
//!   a nested key missing on one side counts as the empty string there
//! - both values arrays: compared as whole values (no element diff)
//! - anything else: direct equality
//!
//! Equality is numeric for numbers (`30` equals `30.0`) at every depth; see
//! [`values_equal`].
//! - a field missing on one side is reported with [`FIELD_REMOVED`] or
//!   [`FIELD_ADDED`] on that side

use crate::diff::model::{ChangeRecord, FIELD_ADDED, FIELD_REMOVED, SUMMARY_MAX_CHARS};
use crate::index::{Record, RecordSet};
use crate::render::{display_value, to_json_text, truncate_chars};
use serde_json::{Map, Number, Value};
use std::collections::BTreeSet;

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}

fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| values_equal(value, other)))
}

/// Deep equality where numbers compare by value.
///
/// Integers compare exactly; when either side is a float both are compared
/// as `f64`. Object key order is irrelevant, array order is significant.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => a == b,
    }
}

/// Truncated JSON text of a record, used as the Added/Deleted payload.
fn record_summary(record: &Record) -> String {
    truncate_chars(&to_json_text(record, false), SUMMARY_MAX_CHARS)
}

fn modified(key: &str, field_path: String, old_value: String, new_value: String) -> ChangeRecord {
    ChangeRecord::Modified {
        key: key.to_string(),
        field_path,
        old_value,
        new_value,
    }
}

/// Compare two nested objects key by key.
fn compare_nested(
    key: &str,
    field: &str,
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    changes: &mut Vec<ChangeRecord>,
) {
    let empty = Value::String(String::new());
    let nested_fields: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();
    for nested in nested_fields {
        let old_value = old.get(nested).unwrap_or(&empty);
        let new_value = new.get(nested).unwrap_or(&empty);
        if !values_equal(old_value, new_value) {
            changes.push(modified(
                key,
                format!("{}.{}", field, nested),
                display_value(old_value),
                display_value(new_value),
            ));
        }
    }
}

/// Compare two records with the same key, appending one Modified per difference.
fn compare_records(key: &str, old: &Record, new: &Record, changes: &mut Vec<ChangeRecord>) {
    let fields: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();
    for field in fields {
        match (old.get(field), new.get(field)) {
            (Some(Value::Object(a)), Some(Value::Object(b))) => {
                compare_nested(key, field, a, b, changes);
            }
            // Arrays and scalars alike: whole-value equality
            (Some(a), Some(b)) => {
                if !values_equal(a, b) {
                    changes.push(modified(
                        key,
                        field.to_string(),
                        display_value(a),
                        display_value(b),
                    ));
                }
            }
            (Some(a), None) => changes.push(modified(
                key,
                field.to_string(),
                display_value(a),
                FIELD_REMOVED.to_string(),
            )),
            (None, Some(b)) => changes.push(modified(
                key,
                field.to_string(),
                FIELD_ADDED.to_string(),
                display_value(b),
            )),
            (None, None) => {}
        }
    }
}

/// Compute the change records between an old and a new record set.
///
/// Total over all inputs: empty sets simply produce fewer changes.
pub fn compute_changes(old: &RecordSet, new: &RecordSet) -> Vec<ChangeRecord> {
    let old_keys: BTreeSet<&str> = old.keys().map(String::as_str).collect();
    let new_keys: BTreeSet<&str> = new.keys().map(String::as_str).collect();

    let mut changes = Vec::new();

    for key in new_keys.difference(&old_keys) {
        changes.push(ChangeRecord::Added {
            key: key.to_string(),
            summary: record_summary(&new[*key]),
        });
    }

    for key in old_keys.difference(&new_keys) {
        changes.push(ChangeRecord::Deleted {
            key: key.to_string(),
            summary: record_summary(&old[*key]),
        });
    }

    for key in old_keys.intersection(&new_keys) {
        let old_record = &old[*key];
        let new_record = &new[*key];
        if !objects_equal(old_record, new_record) {
            compare_records(key, old_record, new_record, &mut changes);
        }
    }

    tracing::debug!(
        old_records = old.len(),
        new_records = new.len(),
        changes = changes.len(),
        "computed record changes"
    );

    changes
}
