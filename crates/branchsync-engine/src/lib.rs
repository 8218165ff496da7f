//! branchsync engine - orchestration layer
//!
//! Provides high-level command orchestration that coordinates between the
//! pure comparison kernel and the file system boundary.

pub mod commands;

pub use commands::compare::{compare_run, CompareOptions, CompareOutcome};
pub use commands::format::{format_run, FormatOptions, FormatOutcome};
