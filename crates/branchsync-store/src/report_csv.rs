//! CSV change report writer.
//!
//! Header `ChangeType,<key_field>,FieldName,OldValue,NewValue`; fields are
//! quoted only when needed and every row ends with CRLF.

use crate::atomic::atomic_write;
use crate::errors::{csv_error, Result};
use branchsync_core::ReportRow;
use std::path::Path;

/// Encode report rows as CSV bytes.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn encode_change_report(key_field: &str, rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(ReportRow::header(key_field))
        .map_err(|e| csv_error("encode_change_report", e))?;
    for row in rows {
        writer
            .write_record(row.cells())
            .map_err(|e| csv_error("encode_change_report", e))?;
    }

    writer
        .into_inner()
        .map_err(|e| csv_error("encode_change_report", csv::Error::from(e.into_error())))
}

/// Write the change report to `path`.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be written.
pub fn write_change_report(path: &Path, key_field: &str, rows: &[ReportRow]) -> Result<()> {
    let bytes = encode_change_report(key_field, rows)?;
    atomic_write(path, &bytes)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote change report");

    Ok(())
}
