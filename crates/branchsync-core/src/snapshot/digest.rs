//! Digest computation for snapshot documents.
//!
//! ## Determinism Guarantees
//!
//! - Same document → same digest (compact JSON serialization)
//! - Key order matters in the serialized bytes, so compare digests of
//!   canonical documents only

use crate::errors::Result;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compute the digest of a document.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns a `Serialization` error if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use branchsync_core::snapshot::digest::compute_document_digest;
///
/// let doc = serde_json::json!({"data": []});
/// let digest = compute_document_digest(&doc).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_document_digest(doc: &Value) -> Result<String> {
    let canonical = serde_json::to_string(doc)?;
    Ok(hash_string(&canonical))
}

/// Hash a string using SHA256.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
