//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TableRow;
use crate::error::Result;

/// Writes rows to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Ana", "message": "Gatos", "count": 2}
/// ]
/// ```
pub fn write_json<T: TableRow>(rows: &[T], path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts rows to a JSON array string.
pub fn to_json<T: TableRow>(rows: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
