//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TableRow;
use crate::error::{Result, ZapstatsError};

/// Writes rows to a CSV file.
///
/// # Format
/// - Delimiter: `delimiter` (`;` by default in [`ReportConfig`](crate::config::ReportConfig))
/// - Header: [`TableRow::COLUMNS`], written even when `rows` is empty
/// - Encoding: UTF-8
pub fn write_csv<T: TableRow>(rows: &[T], path: impl AsRef<Path>, delimiter: u8) -> Result<()> {
    let file = File::create(path)?;
    write_rows(rows, file, delimiter)
}

/// Converts rows to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv<T: TableRow>(rows: &[T], delimiter: u8) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(rows, &mut buffer, delimiter)?;
    String::from_utf8(buffer).map_err(|e| ZapstatsError::invalid_format("CSV", e.to_string()))
}

fn write_rows<T: TableRow, W: Write>(rows: &[T], sink: W, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer.flush()?;
    Ok(())
}
