//! Configuration types for each pipeline stage.
//!
//! Plain structs with builder methods, usable without any CLI framework:
//!
//! - [`IngestConfig`] - reading the chat directory
//! - [`AnalysisConfig`] - table building and result limits
//! - [`RakeConfig`] - keyword extraction
//! - [`ReportConfig`] - where and how reports are written
//!
//! # Example
//!
//! ```rust
//! use zapstats::config::{AnalysisConfig, ReportConfig};
//! use zapstats::format::OutputFormat;
//!
//! let analysis = AnalysisConfig::new()
//!     .with_min_messages(5)
//!     .with_word_limit(Some(50));
//!
//! let report = ReportConfig::new()
//!     .with_output_dir("reports")
//!     .with_format(OutputFormat::Json);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::keywords::RankingMetric;
use crate::format::OutputFormat;

/// Settings for reading a directory of chat exports.
///
/// # Example
///
/// ```rust
/// use zapstats::config::IngestConfig;
///
/// let config = IngestConfig::new().with_strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Fail on the first malformed file instead of skipping it (default: false)
    pub strict: bool,
}

impl IngestConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether malformed files abort the read.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Settings for building the table and sizing the analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Senders with fewer messages are dropped from the table (default: 10)
    pub min_messages: usize,

    /// Top words kept per sender; `None` keeps all (default: None)
    pub word_limit: Option<usize>,

    /// Top keyword phrases kept; `None` keeps all (default: None)
    pub phrase_limit: Option<usize>,

    /// Skip records whose time or date fields don't parse (default: true)
    pub skip_invalid: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_messages: 10,
            word_limit: None,
            phrase_limit: None,
            skip_invalid: true,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sparse-sender threshold.
    #[must_use]
    pub fn with_min_messages(mut self, min: usize) -> Self {
        self.min_messages = min;
        self
    }

    /// Sets the per-sender word limit.
    #[must_use]
    pub fn with_word_limit(mut self, limit: Option<usize>) -> Self {
        self.word_limit = limit;
        self
    }

    /// Sets the keyword phrase limit.
    #[must_use]
    pub fn with_phrase_limit(mut self, limit: Option<usize>) -> Self {
        self.phrase_limit = limit;
        self
    }

    /// Sets whether invalid records are skipped.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// RAKE keyword extraction settings.
///
/// # Example
///
/// ```rust
/// use zapstats::config::RakeConfig;
///
/// let config = RakeConfig::new()
///     .with_max_length(3)
///     .with_repeated_phrases(false);
/// assert_eq!(config.max_length, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RakeConfig {
    /// Shortest phrase kept, in words (default: 1)
    pub min_length: usize,

    /// Longest phrase kept, in words (default: 100000)
    pub max_length: usize,

    /// Keep every occurrence of a phrase in the ranking (default: true)
    pub include_repeated_phrases: bool,

    /// Word scoring metric (default: degree / frequency)
    pub metric: RankingMetric,
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 100_000,
            include_repeated_phrases: true,
            metric: RankingMetric::default(),
        }
    }
}

impl RakeConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum phrase length.
    #[must_use]
    pub fn with_min_length(mut self, words: usize) -> Self {
        self.min_length = words;
        self
    }

    /// Sets the maximum phrase length.
    #[must_use]
    pub fn with_max_length(mut self, words: usize) -> Self {
        self.max_length = words;
        self
    }

    /// Sets whether repeated phrases stay in the ranking.
    #[must_use]
    pub fn with_repeated_phrases(mut self, include: bool) -> Self {
        self.include_repeated_phrases = include;
        self
    }

    /// Sets the word scoring metric.
    #[must_use]
    pub fn with_metric(mut self, metric: RankingMetric) -> Self {
        self.metric = metric;
        self
    }
}

/// Where and how reports are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory that receives every report (default: `.`)
    pub output_dir: PathBuf,

    /// Format of the two tables (default: CSV)
    pub format: OutputFormat,

    /// CSV field delimiter (default: `;`)
    pub delimiter: u8,

    /// Also write the concatenated chat text (default: false)
    pub save_raw: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            delimiter: b';',
            save_raw: false,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the table format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the CSV delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the concatenated chat text is written.
    #[must_use]
    pub fn with_save_raw(mut self, save: bool) -> Self {
        self.save_raw = save;
        self
    }
}
