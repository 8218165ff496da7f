//! Canonical formatting of a single document.

use branchsync_core::snapshot::compute_document_digest;
use branchsync_core::{canonicalize, log_op_end, log_op_error, log_op_start};
use branchsync_store::errors::Result;
use branchsync_store::loader::load_new_document;
use branchsync_store::persist::{to_pretty_json, write_document_pretty};
use std::path::PathBuf;

/// Options for a format run.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub input_path: PathBuf,
    /// Destination file; `None` leaves writing the text to the caller
    pub output_path: Option<PathBuf>,
}

/// Result of a format run.
#[derive(Debug, Clone)]
pub struct FormatOutcome {
    /// Pretty canonical JSON
    pub text: String,
    pub output_path: Option<PathBuf>,
    pub digest: String,
}

/// Canonicalize one document, optionally writing it to a file.
///
/// ## Errors
///
/// - `MissingInput` / `MalformedInput`: the input is unusable
/// - `Io`: the output could not be written
pub fn format_run(options: &FormatOptions) -> Result<FormatOutcome> {
    log_op_start!("format_run", input_path = %options.input_path.display());
    let start = std::time::Instant::now();

    let outcome = format_run_impl(options).map_err(|e| {
        log_op_error!(
            "format_run",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "format_run",
        duration_ms = start.elapsed().as_millis() as u64,
        digest = outcome.digest.as_str()
    );

    Ok(outcome)
}

fn format_run_impl(options: &FormatOptions) -> Result<FormatOutcome> {
    let doc = load_new_document(&options.input_path)?;
    let canonical = canonicalize(&doc);

    if let Some(path) = &options.output_path {
        write_document_pretty(path, &canonical)?;
    }

    Ok(FormatOutcome {
        text: to_pretty_json(&canonical)?,
        output_path: options.output_path.clone(),
        digest: compute_document_digest(&canonical)?,
    })
}
