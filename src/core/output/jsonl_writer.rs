//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::TableRow;
use crate::error::Result;

/// Writes rows as JSON Lines: one compact object per line.
pub fn write_jsonl<T: TableRow>(rows: &[T], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts rows to a JSON Lines string.
pub fn to_jsonl<T: TableRow>(rows: &[T]) -> Result<String> {
    let mut output = String::new();
    for row in rows {
        output.push_str(&serde_json::to_string(row)?);
        output.push('\n');
    }
    Ok(output)
}
