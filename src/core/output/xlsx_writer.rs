//! Excel workbook writer.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::warn;

use super::TableRow;
use crate::error::Result;

/// Longest text an Excel cell accepts, in characters.
const MAX_CELL_CHARS: usize = 32_767;

/// Writes rows to an `.xlsx` workbook with a single sheet.
///
/// # Format
/// - Row 1: [`TableRow::COLUMNS`] in bold, written even when `rows` is empty
/// - Columns listed in [`TableRow::NUMERIC_COLUMNS`] are number cells
/// - Text longer than an Excel cell allows is cut to fit
pub fn write_xlsx<T: TableRow>(rows: &[T], path: impl AsRef<Path>) -> Result<()> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;
    Ok(())
}

/// Renders rows as the bytes of an `.xlsx` workbook.
///
/// Same layout as [`write_xlsx`].
pub fn to_xlsx<T: TableRow>(rows: &[T]) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(rows)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook<T: TableRow>(rows: &[T]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, name) in (0u16..).zip(T::COLUMNS) {
        sheet.write_string_with_format(0, col, *name, &bold)?;
    }

    for (row_num, row) in (1u32..).zip(rows) {
        for ((col, name), field) in (0u16..).zip(T::COLUMNS).zip(row.fields()) {
            write_cell(sheet, row_num, col, T::NUMERIC_COLUMNS.contains(name), field)?;
        }
    }

    Ok(workbook)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, numeric: bool, field: String) -> Result<()> {
    if numeric {
        if let Ok(number) = field.parse::<f64>() {
            sheet.write_number(row, col, number)?;
            return Ok(());
        }
    }

    if field.chars().count() > MAX_CELL_CHARS {
        warn!(row, col, "cell text truncated to {} characters", MAX_CELL_CHARS);
        let cut: String = field.chars().take(MAX_CELL_CHARS).collect();
        sheet.write_string(row, col, cut)?;
    } else {
        sheet.write_string(row, col, field)?;
    }
    Ok(())
}
