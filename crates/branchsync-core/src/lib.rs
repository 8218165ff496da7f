//! branchsync core - pure comparison kernel
//!
//! This crate holds everything that needs no I/O:
//! - Canonical normalization of JSON documents
//! - Keyed record extraction
//! - Field-level record diffing and change classification
//! - Change aggregation (counts, report rows, console summary)
//! - The error and logging facilities shared by the other crates

pub mod canonical;
pub mod compare;
pub mod diff;
pub mod errors;
pub mod index;
pub mod logging_facility;
pub mod render;
pub mod report;
pub mod snapshot;

pub use branchsync_core_types as core_types;

// Re-export commonly used types
pub use canonical::canonicalize;
pub use compare::{compare_documents, Comparison};
pub use diff::{compute_changes, ChangeRecord, ChangeType};
pub use errors::{ExError, ExErrorKind, LoadError, Result};
pub use index::{index_by_key, Record, RecordSet, DEFAULT_KEY_FIELD};
pub use report::{render_human_summary, summarize, DiffSummary, ReportRow};
