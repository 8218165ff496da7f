//! Canonical normalization of documents.
//!
//! [`canonicalize`] turns an arbitrary JSON value tree into a deterministic
//! form: object entries sorted by key, array elements sorted by a textual sort
//! key. Two documents that differ only in object key order canonicalize to the
//! same value and the same serialized bytes, so the persisted snapshot is
//! stable across runs on equivalent input.
//!
//! ## Coordinate pairs
//!
//! An array of exactly two strings that both contain an ASCII digit (`0`-`9`)
//! is treated as an ordered coordinate pair (e.g. `["40.7128", "-74.0060"]`)
//! and is kept as-is.
//!
//! ## Array ordering
//!
//! Elements are canonicalized first, then stably sorted by:
//! - objects: their JSON text (`", "` / `": "` separators, ASCII-escaped)
//! - everything else: their display string
//!
//! Keys compare lexicographically by code point. Elements with equal keys keep
//! their input order.

use crate::render::{display_value, to_json_text};
use serde_json::{Map, Value};

/// Canonicalize a document. Pure and idempotent.
pub fn canonicalize(doc: &Value) -> Value {
    match doc {
        Value::Object(map) => Value::Object(canonicalize_object(map)),
        Value::Array(items) if is_coordinate_pair(items) => doc.clone(),
        Value::Array(items) => {
            let mut keyed: Vec<(String, Value)> = items
                .iter()
                .map(canonicalize)
                .map(|item| (sort_key(&item), item))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Array(keyed.into_iter().map(|(_, item)| item).collect())
        }
        scalar => scalar.clone(),
    }
}

fn canonicalize_object(map: &Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), canonicalize(value)))
        .collect()
}

/// True for a two-element array of strings that each contain an ASCII digit.
pub fn is_coordinate_pair(items: &[Value]) -> bool {
    items.len() == 2
        && items.iter().all(|item| match item {
            Value::String(s) => s.chars().any(|c| c.is_ascii_digit()),
            _ => false,
        })
}

/// Sort key of one (already canonical) array element.
pub fn sort_key(item: &Value) -> String {
    match item {
        Value::Object(_) => to_json_text(item, true),
        other => display_value(other),
    }
}
