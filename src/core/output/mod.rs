//! Report writers.
//!
//! - [`write_csv`] / [`to_csv`] - delimited table with a header row
//! - [`write_json`] / [`to_json`] - JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line - requires `json-output` feature
//! - [`write_xlsx`] / [`to_xlsx`] - Excel workbook - requires `xlsx-output` feature
//! - [`write_phrases`] / [`to_phrases_text`] - keyword phrases, one per paragraph
//!
//! The tabular writers accept any [`TableRow`]: [`MessageRecord`] for the
//! message table and [`WordCount`] for the word counts.
//! [`write_reports`] writes every artifact of a run into one directory.
//!
//! # Example
//!
//! ```rust
//! use zapstats::core::WordCount;
//! use zapstats::core::output::to_csv;
//!
//! let rows = vec![WordCount::new("Ana", "Gatos", 2)];
//! let csv = to_csv(&rows, b';')?;
//!
//! assert_eq!(csv, "sender;message;count\nAna;Gatos;2\n");
//! # Ok::<(), zapstats::ZapstatsError>(())
//! ```

mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;
#[cfg(feature = "xlsx-output")]
mod xlsx_writer;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::ReportConfig;
use crate::core::models::WordCount;
use crate::core::processor::AnalysisReport;
use crate::error::Result;
use crate::format::write_to_format;
use crate::ingest::{ChatCorpus, RAW_TEXT_FILE};
use crate::message::MessageRecord;

pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_phrases_text, write_phrases};
#[cfg(feature = "xlsx-output")]
pub use xlsx_writer::{to_xlsx, write_xlsx};

/// File stem of the message table.
pub const MESSAGES_FILE_STEM: &str = "all_messages";
/// File stem of the word count table.
pub const WORD_COUNTS_FILE_STEM: &str = "word_count_data";
/// File name of the keyword phrase list.
pub const PHRASES_FILE: &str = "rake_phrases.txt";

/// A row of one of the report tables.
///
/// `COLUMNS` is the header row and the serde field names; `fields` renders
/// the row in the same order for CSV. Spreadsheets store the
/// `NUMERIC_COLUMNS` as numbers.
pub trait TableRow: Serialize {
    const COLUMNS: &'static [&'static str];
    const NUMERIC_COLUMNS: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<String>;
}

impl TableRow for MessageRecord {
    const COLUMNS: &'static [&'static str] = &["month", "day", "year", "time", "sender", "message"];
    const NUMERIC_COLUMNS: &'static [&'static str] = &["month", "day", "year"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.month.to_string(),
            self.day.to_string(),
            self.year.to_string(),
            self.time_string(),
            self.sender.clone(),
            self.message.clone(),
        ]
    }
}

impl TableRow for WordCount {
    const COLUMNS: &'static [&'static str] = &["sender", "message", "count"];
    const NUMERIC_COLUMNS: &'static [&'static str] = &["count"];

    fn fields(&self) -> Vec<String> {
        vec![self.sender.clone(), self.word.clone(), self.count.to_string()]
    }
}

/// Writes every artifact of a run into `config.output_dir` and returns the
/// paths written.
///
/// The raw text is only written when `config.save_raw` is set. The output
/// directory is created if missing.
pub fn write_reports(
    report: &AnalysisReport,
    corpus: &ChatCorpus,
    config: &ReportConfig,
) -> Result<Vec<PathBuf>> {
    let dir = config.output_dir.as_path();
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    if config.save_raw {
        let path = dir.join(RAW_TEXT_FILE);
        corpus.persist(&path)?;
        written.push(path);
    }

    let path = table_path(dir, MESSAGES_FILE_STEM, config);
    write_to_format(report.table.records(), &path, config.format, config.delimiter)?;
    written.push(path);

    let path = table_path(dir, WORD_COUNTS_FILE_STEM, config);
    write_to_format(&report.word_counts, &path, config.format, config.delimiter)?;
    written.push(path);

    let path = dir.join(PHRASES_FILE);
    write_phrases(&report.phrases, &path)?;
    written.push(path);

    debug!(files = written.len(), dir = %dir.display(), "wrote reports");
    Ok(written)
}

fn table_path(dir: &Path, stem: &str, config: &ReportConfig) -> PathBuf {
    dir.join(format!("{}.{}", stem, config.format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_columns_match_fields() {
        let time = NaiveTime::from_hms_opt(9, 3, 0).unwrap();
        let record = MessageRecord::new(1, 5, 21, time, "Ana", "oi");
        assert_eq!(record.fields().len(), MessageRecord::COLUMNS.len());
        assert_eq!(record.fields()[3], "09:03:00");

        let count = WordCount::new("Ana", "Gatos", 2);
        assert_eq!(count.fields(), vec!["Ana", "Gatos", "2"]);
    }

    #[test]
    fn test_numeric_columns_are_columns() {
        for name in MessageRecord::NUMERIC_COLUMNS {
            assert!(MessageRecord::COLUMNS.contains(name));
        }
        for name in WordCount::NUMERIC_COLUMNS {
            assert!(WordCount::COLUMNS.contains(name));
        }
    }
}
