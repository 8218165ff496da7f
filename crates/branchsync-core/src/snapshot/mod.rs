//! Snapshot document identity.
//!
//! ## Non-Responsibilities
//!
//! - Persistence (handled by `branchsync-store`)
//! - Orchestration (handled by `branchsync-engine`)

pub mod digest;

pub use digest::compute_document_digest;
