//! Backup directory layout.
//!
//! Every artifact of one run lives in the backup directory and carries the
//! run stamp (`YYYYMMDD_HHMMSS`). The stamp is supplied by the caller so the
//! layout itself never reads the clock.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default backup directory, relative to the working directory.
pub const DEFAULT_BACKUP_DIR: &str = "backup";

/// File names of one run's artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupLayout {
    dir: PathBuf,
    stamp: String,
}

impl BackupLayout {
    pub fn new(dir: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stamp: stamp.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    /// Create the backup directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| io_error("ensure_backup_dir", &self.dir, e))
    }

    /// `branches_comparison_<stamp>.csv`
    pub fn comparison_csv_path(&self) -> PathBuf {
        self.dir.join(format!("branches_comparison_{}.csv", self.stamp))
    }

    /// `formatted_source_<stamp>.json`
    pub fn formatted_copy_path(&self) -> PathBuf {
        self.dir.join(format!("formatted_source_{}.json", self.stamp))
    }

    /// `backup_<old file name>`
    pub fn old_backup_path(&self, old_path: &Path) -> PathBuf {
        let name = old_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dir.join(format!("backup_{}", name))
    }

    /// `error_<stamp>.log`
    pub fn error_log_path(&self) -> PathBuf {
        self.dir.join(format!("error_{}.log", self.stamp))
    }
}
