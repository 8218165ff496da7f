//! Configuration file support for comparison runs
//!
//! Precedence: explicit command-line flags, then the TOML file, then the
//! built-in defaults.

use anyhow::{Context, Result};
use branchsync_core::errors::{ExError, ExErrorKind};
use branchsync_core::DEFAULT_KEY_FIELD;
use branchsync_store::DEFAULT_BACKUP_DIR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default snapshot path
pub const DEFAULT_OLD_PATH: &str = "Center Locatore.json";

/// Default new-data path
pub const DEFAULT_NEW_PATH: &str = "Centers_Raw.json";

/// Comparison settings as read from a file or the command line.
///
/// Every field is optional so that layers can be stacked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub old: Option<PathBuf>,
    pub new: Option<PathBuf>,
    /// CSV report path (default: inside the backup directory)
    pub output: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
    pub key_field: Option<String>,
    /// Overwrite the snapshot with the canonical new document
    pub update: Option<bool>,
}

/// Fully resolved comparison settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareSettings {
    pub old: PathBuf,
    pub new: PathBuf,
    pub output: Option<PathBuf>,
    pub backup_dir: PathBuf,
    pub key_field: String,
    pub update: bool,
}

impl SyncConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn overlay(self, overrides: SyncConfig) -> Self {
        Self {
            old: overrides.old.or(self.old),
            new: overrides.new.or(self.new),
            output: overrides.output.or(self.output),
            backup_dir: overrides.backup_dir.or(self.backup_dir),
            key_field: overrides.key_field.or(self.key_field),
            update: overrides.update.or(self.update),
        }
    }

    /// Fill unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfig` error when the key field is empty.
    pub fn resolve(self) -> std::result::Result<CompareSettings, ExError> {
        let key_field = self
            .key_field
            .unwrap_or_else(|| DEFAULT_KEY_FIELD.to_string());
        if key_field.trim().is_empty() {
            return Err(ExError::new(ExErrorKind::InvalidConfig)
                .with_op("resolve_config")
                .with_message("key_field must not be empty"));
        }

        Ok(CompareSettings {
            old: self.old.unwrap_or_else(|| PathBuf::from(DEFAULT_OLD_PATH)),
            new: self.new.unwrap_or_else(|| PathBuf::from(DEFAULT_NEW_PATH)),
            output: self.output,
            backup_dir: self
                .backup_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_DIR)),
            key_field,
            update: self.update.unwrap_or(true),
        })
    }
}
