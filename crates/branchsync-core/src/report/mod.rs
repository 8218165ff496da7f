//! Aggregation of change records for persistence and review.

pub mod human_summary;
pub mod rows;
pub mod summary;

pub use human_summary::render_human_summary;
pub use rows::{to_report_rows, ReportRow, REPORT_COLUMNS};
pub use summary::{summarize, DiffSummary};
