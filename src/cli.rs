//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Language`] - Built-in stopword lists
//! - [`OutputFormat`] - Table format options
//! - [`Metric`] - RAKE word scoring options
//!
//! [`Args`] maps itself onto the library configuration types, so the binary
//! only orchestrates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, IngestConfig, RakeConfig, ReportConfig};
use crate::core::filter::FilterConfig;
use crate::core::keywords::RankingMetric;
use crate::error::Result;
use crate::stopwords::Stopwords;

/// Word-frequency and keyword reports per sender from WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "zapstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    zapstats
    zapstats ./exports -o reports
    zapstats ./exports -n 20 -k 50 --format json
    zapstats ./exports --language en --after 2021-01-01
    zapstats ./exports --stopwords my_stopwords.txt --save-raw")]
pub struct Args {
    /// Directory with WhatsApp TXT exports
    #[arg(default_value = "./chats")]
    pub input_dir: PathBuf,

    /// Directory for the reports
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Format of the message and word count tables
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// CSV delimiter (single ASCII character, or "tab")
    #[arg(short, long, default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Also write the concatenated chat text (all_chat_data.txt)
    #[arg(long)]
    pub save_raw: bool,

    /// Keep only the N most common words per sender
    #[arg(short = 'n', long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Keep only the N best keyword phrases
    #[arg(short = 'k', long, value_name = "N")]
    pub top_phrases: Option<usize>,

    /// Drop senders with fewer messages than this
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub min_messages: usize,

    /// Built-in stopword list
    #[arg(short, long, value_enum, default_value = "portuguese")]
    pub language: Language,

    /// Newline-delimited stopword file, replaces the built-in list
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from one sender only
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Abort on malformed files and records instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Longest keyword phrase, in words
    #[arg(long, value_name = "N")]
    pub rake_max_words: Option<usize>,

    /// Count each keyword phrase once
    #[arg(long)]
    pub unique_phrases: bool,

    /// RAKE word scoring
    #[arg(long, value_enum, default_value = "ratio")]
    pub rake_metric: Metric,
}

impl Args {
    pub fn ingest_config(&self) -> IngestConfig {
        IngestConfig::new().with_strict(self.strict)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_min_messages(self.min_messages)
            .with_word_limit(self.top_words)
            .with_phrase_limit(self.top_phrases)
            .with_skip_invalid(!self.strict)
    }

    pub fn rake_config(&self) -> RakeConfig {
        let mut config = RakeConfig::new()
            .with_repeated_phrases(!self.unique_phrases)
            .with_metric(self.rake_metric.into());
        if let Some(max) = self.rake_max_words {
            config = config.with_max_length(max);
        }
        config
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_output_dir(&self.output_dir)
            .with_format(self.format.into())
            .with_delimiter(self.delimiter)
            .with_save_raw(self.save_raw)
    }

    /// Builds the record filter; fails on malformed dates.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from.clone());
        }
        Ok(filter)
    }

    /// Loads the custom stopword file, or the built-in list for the language.
    pub fn load_stopwords(&self) -> Result<Stopwords> {
        match self.stopwords {
            Some(ref path) => Stopwords::from_file(path),
            None => Ok(Stopwords::for_language(self.language.into())),
        }
    }
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    if s.eq_ignore_ascii_case("tab") || s == "\\t" {
        return Ok(b'\t');
    }
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!(
            "Invalid delimiter: '{}'. Expected a single ASCII character or \"tab\"",
            s
        )),
    }
}

/// Built-in stopword lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// NLTK Portuguese stopwords
    #[default]
    #[value(alias = "pt")]
    Portuguese,

    /// NLTK English stopwords
    #[value(alias = "en")]
    English,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::stopwords::Language::from(*self))
    }
}

impl From<Language> for crate::stopwords::Language {
    fn from(language: Language) -> crate::stopwords::Language {
        match language {
            Language::Portuguese => crate::stopwords::Language::Portuguese,
            Language::English => crate::stopwords::Language::English,
        }
    }
}

/// Table format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited text (default)
    #[default]
    Csv,

    /// JSON array
    Json,

    /// JSON Lines - one object per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// Excel workbook
    Xlsx,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Xlsx => crate::format::OutputFormat::Xlsx,
        }
    }
}

/// RAKE word scoring options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// degree / frequency (default)
    #[default]
    Ratio,

    /// word degree
    Degree,

    /// word frequency
    Frequency,
}

impl From<Metric> for RankingMetric {
    fn from(metric: Metric) -> RankingMetric {
        match metric {
            Metric::Ratio => RankingMetric::DegreeToFrequencyRatio,
            Metric::Degree => RankingMetric::WordDegree,
            Metric::Frequency => RankingMetric::WordFrequency,
        }
    }
}
