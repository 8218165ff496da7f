//! branchsync store - file system boundary
//!
//! Provides:
//! - Document loading with missing/malformed distinction
//! - Backup directory layout (timestamped artifact names)
//! - Atomic pretty-printed snapshot writes and old-file backups
//! - CSV change report and error log writers

pub mod atomic;
pub mod errors;
pub mod layout;
pub mod loader;
pub mod persist;
pub mod report_csv;

// Re-export key types
pub use errors::Result;
pub use layout::{BackupLayout, DEFAULT_BACKUP_DIR};
pub use loader::{load_document, load_new_document, load_old_document, OldSnapshot, OldState};
pub use persist::{backup_file, write_document_pretty, write_error_log};
pub use report_csv::write_change_report;
