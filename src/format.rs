//! Output formats for the report tables.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> zapstats::Result<()> {
//! use zapstats::core::WordCount;
//! use zapstats::format::{OutputFormat, to_format_string};
//!
//! let rows = vec![WordCount::new("Ana", "Gatos", 2)];
//! let jsonl = to_format_string(&rows, OutputFormat::Jsonl, b';')?;
//! assert!(jsonl.starts_with('{'));
//!
//! let format = OutputFormat::from_path("word_count_data.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::output::TableRow;
use crate::error::ZapstatsError;

/// Format of the message table and word count files.
///
/// # Example
///
/// ```rust
/// use zapstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Delimited text with a header row (default)
    ///
    /// Opens directly in spreadsheet applications.
    #[default]
    Csv,

    /// JSON array of row objects
    Json,

    /// JSON Lines - one row object per line
    ///
    /// Also known as NDJSON.
    Jsonl,

    /// Excel workbook, one sheet with a bold header row
    Xlsx,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson", "xlsx"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Xlsx,
        ]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zapstats::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("all_messages.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ZapstatsError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "xlsx" => Ok(OutputFormat::Xlsx),
            _ => Err(ZapstatsError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl, xlsx",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Xlsx => write!(f, "XLSX"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "xlsx" => Ok(OutputFormat::Xlsx),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes table rows to a file in the given format.
///
/// `delimiter` only applies to CSV.
///
/// # Errors
///
/// Returns an error if:
/// - JSON formats are requested without the `json-output` feature
/// - XLSX is requested without the `xlsx-output` feature
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format<T: TableRow>(
    rows: &[T],
    path: impl AsRef<Path>,
    format: OutputFormat,
    delimiter: u8,
) -> Result<(), ZapstatsError> {
    match format {
        OutputFormat::Csv => crate::core::output::write_csv(rows, path, delimiter),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(rows, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(rows, path),
        #[cfg(feature = "xlsx-output")]
        OutputFormat::Xlsx => crate::core::output::write_xlsx(rows, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders table rows as a string in the given format.
///
/// XLSX is binary and has no string form; use
/// [`to_xlsx`](crate::core::output) for workbook bytes.
#[allow(unused_variables)]
pub fn to_format_string<T: TableRow>(
    rows: &[T],
    format: OutputFormat,
    delimiter: u8,
) -> Result<String, ZapstatsError> {
    match format {
        OutputFormat::Csv => crate::core::output::to_csv(rows, delimiter),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(rows),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(rows),
        OutputFormat::Xlsx => Err(ZapstatsError::invalid_format(
            "output",
            "XLSX is a binary format and cannot be rendered as text",
        )),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ZapstatsError {
    let feature = match format {
        OutputFormat::Xlsx => "xlsx-output",
        _ => "json-output",
    };
    ZapstatsError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format, feature
        ),
    )
}
