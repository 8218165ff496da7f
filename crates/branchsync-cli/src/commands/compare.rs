//! Compare command

use crate::config::{CompareSettings, SyncConfig};
use anyhow::{Context, Result};
use branchsync_core::core_types::RunId;
use branchsync_core::render_human_summary;
use branchsync_engine::{compare_run, CompareOptions};
use branchsync_store::{write_error_log, BackupLayout, DEFAULT_BACKUP_DIR};
use chrono::Local;
use clap::Args;
use std::path::{Path, PathBuf};

/// Run stamp used in artifact file names
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp line of the error log
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Snapshot file to compare against and update [default: "Center Locatore.json"]
    #[arg(long)]
    pub old: Option<PathBuf>,

    /// New data file [default: Centers_Raw.json]
    #[arg(long)]
    pub new: Option<PathBuf>,

    /// CSV report path [default: <backup-dir>/branches_comparison_<stamp>.csv]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory for backups, formatted copies, reports and error logs [default: backup]
    #[arg(long)]
    pub backup_dir: Option<PathBuf>,

    /// Field identifying a record [default: branch_code]
    #[arg(long)]
    pub key_field: Option<String>,

    /// Leave the snapshot file untouched
    #[arg(long)]
    pub no_update: bool,

    /// TOML file with defaults for the options above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CompareArgs {
    /// Flags given on the command line, as a config layer
    fn as_overrides(&self) -> SyncConfig {
        SyncConfig {
            old: self.old.clone(),
            new: self.new.clone(),
            output: self.output.clone(),
            backup_dir: self.backup_dir.clone(),
            key_field: self.key_field.clone(),
            update: self.no_update.then_some(false),
        }
    }

    fn settings(&self) -> Result<CompareSettings> {
        let file = match &self.config {
            Some(path) => SyncConfig::load(path)?,
            None => SyncConfig::default(),
        };
        Ok(file.overlay(self.as_overrides()).resolve()?)
    }
}

pub fn execute(args: CompareArgs, run_id: &RunId) -> Result<()> {
    let stamp = Local::now().format(STAMP_FORMAT).to_string();

    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => return Err(record_failure(Path::new(DEFAULT_BACKUP_DIR), &stamp, e)),
    };

    let layout = BackupLayout::new(settings.backup_dir.clone(), stamp.clone());
    match run(&settings, layout, run_id) {
        Ok(()) => Ok(()),
        Err(e) => Err(record_failure(&settings.backup_dir, &stamp, e)),
    }
}

fn run(settings: &CompareSettings, layout: BackupLayout, run_id: &RunId) -> Result<()> {
    let options = CompareOptions {
        old_path: settings.old.clone(),
        new_path: settings.new.clone(),
        report_path: settings.output.clone(),
        key_field: settings.key_field.clone(),
        update_old: settings.update,
        layout,
    };

    let outcome = compare_run(&options)
        .map_err(|e| e.with_run_id(run_id.clone()))
        .context("comparison failed")?;

    print!("{}", render_human_summary(&outcome.summary));
    println!("Results saved to {}", outcome.report_path.display());
    if outcome.snapshot_updated {
        println!(
            "Source file has been formatted and copied to {}",
            settings.old.display()
        );
    }

    Ok(())
}

/// Best-effort error log in the backup directory; returns the original error.
fn record_failure(backup_dir: &Path, stamp: &str, err: anyhow::Error) -> anyhow::Error {
    let layout = BackupLayout::new(backup_dir, stamp);
    let path = layout.error_log_path();
    let now = Local::now().format(LOG_TIME_FORMAT).to_string();
    match write_error_log(&path, &now, &format!("{:#}", err)) {
        Ok(()) => eprintln!("Error details written to: {}", path.display()),
        Err(log_err) => eprintln!("Failed to write error log: {}", log_err),
    }
    err
}
