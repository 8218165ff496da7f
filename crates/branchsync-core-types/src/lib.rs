//! Core types shared across branchsync facilities
//!
//! - **Correlation types**: RunId, attached to every event of one invocation
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
