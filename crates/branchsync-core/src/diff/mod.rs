//! Record set diff engine.
//!
//! Compares two keyed record sets and produces field-level change records.
//!
//! ## Entry point
//!
//! ```ignore
//! use branchsync_core::diff::engine::compute_changes;
//!
//! let changes = compute_changes(&old_records, &new_records);
//! ```
//!
//! ## Guarantees
//!
//! - **Completeness**: every key only in the new set yields exactly one
//!   `Added`; every key only in the old set yields exactly one `Deleted`.
//! - **Soundness**: keys whose records are deep-equal yield nothing; numbers
//!   compare by value, so `30` and `30.0` are equal.
//! - **Determinism**: output order is Added (by key), Deleted (by key), then
//!   Modified (by key, then field path).

pub mod engine;
pub mod model;

pub use engine::{compute_changes, values_equal};
pub use model::{ChangeRecord, ChangeType};
