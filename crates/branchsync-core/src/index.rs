//! Keyed record extraction.
//!
//! Accepted document shapes:
//! - `{"data": [record, ...], ...}` - the `data` array holds the records
//! - `[record, ...]` - the document itself is the record array
//!
//! Anything else yields an empty [`RecordSet`]. Elements that are not objects,
//! or that lack a string-valued key field, are skipped without error.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Default name of the field that identifies a record.
pub const DEFAULT_KEY_FIELD: &str = "branch_code";

/// Name of the wrapper field holding the record array.
pub const DATA_FIELD: &str = "data";

/// One keyed record (an object document).
pub type Record = Map<String, Value>;

/// Records by key. Keys are unique; the last record seen for a key wins.
pub type RecordSet = BTreeMap<String, Record>;

/// Return the record sequence of a document, or an empty slice.
pub fn record_sequence(doc: &Value) -> &[Value] {
    match doc {
        Value::Object(map) => match map.get(DATA_FIELD) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}

/// Index the records of `doc` by the string value of `key_field`.
pub fn index_by_key(doc: &Value, key_field: &str) -> RecordSet {
    let mut records = RecordSet::new();
    let mut skipped = 0usize;
    for item in record_sequence(doc) {
        match item {
            Value::Object(record) => match record.get(key_field) {
                Some(Value::String(key)) => {
                    records.insert(key.clone(), record.clone());
                }
                _ => skipped += 1,
            },
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(key_field, skipped, "skipped records without a usable key");
    }
    records
}
