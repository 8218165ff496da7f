//! Snapshot comparison run.
//!
//! ## Pipeline (in order):
//! 1. Ensure the backup directory exists
//! 2. Load the new document (missing or malformed is fatal, nothing written)
//! 3. Load the old snapshot (missing or malformed degrades to `{}`)
//! 4. Back up the old file when it loaded
//! 5. Canonicalize, index, diff, summarize
//! 6. Write the formatted copy and the change report
//! 7. Overwrite the old file with the canonical document (unless disabled)

use branchsync_core::index::DEFAULT_KEY_FIELD;
use branchsync_core::report::to_report_rows;
use branchsync_core::snapshot::compute_document_digest;
use branchsync_core::{compare_documents, log_op_end, log_op_error, log_op_start};
use branchsync_core::{ChangeRecord, DiffSummary};
use branchsync_store::errors::Result;
use branchsync_store::{
    backup_file, load_new_document, load_old_document, write_change_report,
    write_document_pretty, BackupLayout, OldState,
};
use std::path::PathBuf;

/// Options for a comparison run.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Previous snapshot, overwritten on success when `update_old` is set
    pub old_path: PathBuf,
    /// Fresh data to compare against the snapshot
    pub new_path: PathBuf,
    /// Explicit CSV report path; defaults to the layout's comparison file
    pub report_path: Option<PathBuf>,
    pub key_field: String,
    pub update_old: bool,
    pub layout: BackupLayout,
}

impl CompareOptions {
    /// Options with the default key field, report path and update behavior.
    pub fn new(
        old_path: impl Into<PathBuf>,
        new_path: impl Into<PathBuf>,
        layout: BackupLayout,
    ) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
            report_path: None,
            key_field: DEFAULT_KEY_FIELD.to_string(),
            update_old: true,
            layout,
        }
    }

    fn effective_report_path(&self) -> PathBuf {
        self.report_path
            .clone()
            .unwrap_or_else(|| self.layout.comparison_csv_path())
    }
}

/// Result of a successful comparison run.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    pub summary: DiffSummary,
    pub changes: Vec<ChangeRecord>,
    pub old_state: OldState,
    pub old_records: usize,
    pub new_records: usize,
    pub report_path: PathBuf,
    pub formatted_copy_path: PathBuf,
    /// Where the previous snapshot was copied, if it existed and parsed
    pub backup_path: Option<PathBuf>,
    /// Whether the old file was overwritten with the canonical document
    pub snapshot_updated: bool,
    /// SHA-256 of the canonical document
    pub digest: String,
}

/// Run a comparison and persist its artifacts.
///
/// ## Errors
///
/// - `MissingInput` / `MalformedInput`: the new document is unusable
/// - `Io`: the backup directory, a backup, the report or a snapshot could not
///   be written
/// - `Serialization`: the canonical document could not be serialized
pub fn compare_run(options: &CompareOptions) -> Result<CompareOutcome> {
    log_op_start!(
        "compare_run",
        key_field = options.key_field.as_str(),
        old_path = %options.old_path.display(),
        new_path = %options.new_path.display()
    );
    let start = std::time::Instant::now();

    let outcome = compare_run_impl(options).map_err(|e| {
        log_op_error!(
            "compare_run",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare_run",
        duration_ms = start.elapsed().as_millis() as u64,
        old_records = outcome.old_records,
        new_records = outcome.new_records,
        changes = outcome.changes.len(),
        digest = outcome.digest.as_str()
    );

    Ok(outcome)
}

fn compare_run_impl(options: &CompareOptions) -> Result<CompareOutcome> {
    let layout = &options.layout;
    layout.ensure_dir()?;

    let new_doc = load_new_document(&options.new_path)?;
    let old = load_old_document(&options.old_path)?;

    let backup_path = if old.is_loaded() {
        let dest = layout.old_backup_path(&options.old_path);
        backup_file(&options.old_path, &dest)?;
        Some(dest)
    } else {
        None
    };

    let comparison = compare_documents(&old.document, &new_doc, &options.key_field);

    let formatted_copy_path = layout.formatted_copy_path();
    write_document_pretty(&formatted_copy_path, &comparison.canonical)?;

    let report_path = options.effective_report_path();
    write_change_report(
        &report_path,
        &options.key_field,
        &to_report_rows(&comparison.changes),
    )?;

    if options.update_old {
        write_document_pretty(&options.old_path, &comparison.canonical)?;
    }

    let digest = compute_document_digest(&comparison.canonical)?;

    Ok(CompareOutcome {
        summary: comparison.summary,
        changes: comparison.changes,
        old_state: old.state,
        old_records: comparison.old_records,
        new_records: comparison.new_records,
        report_path,
        formatted_copy_path,
        backup_path,
        snapshot_updated: options.update_old,
        digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options =
            CompareOptions::new("old.json", "new.json", BackupLayout::new("backup", "s"));
        assert_eq!(options.key_field, "branch_code");
        assert!(options.update_old);
        assert_eq!(
            options.effective_report_path(),
            PathBuf::from("backup/branches_comparison_s.csv")
        );
    }

    #[test]
    fn test_explicit_report_path_wins() {
        let mut options =
            CompareOptions::new("old.json", "new.json", BackupLayout::new("backup", "s"));
        options.report_path = Some(PathBuf::from("out/report.csv"));
        assert_eq!(
            options.effective_report_path(),
            PathBuf::from("out/report.csv")
        );
    }
}
