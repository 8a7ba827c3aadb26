//! # zapstats
//!
//! Per-sender word frequencies and RAKE keyword phrases from WhatsApp chat
//! exports.
//!
//! ## Overview
//!
//! A run reads every export in a directory, extracts the messages, builds a
//! typed table and produces three reports:
//!
//! - **all_messages** - every message with its date, time and sender
//! - **word_count_data** - the most common words of each sender
//! - **rake_phrases.txt** - the top keyword phrases of the whole conversation
//!
//! Senders with fewer than 10 messages are left out of the table as noise.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zapstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let corpus = read_chat_dir("./chats", &IngestConfig::new())?;
//!     let stopwords = Stopwords::for_language(Language::Portuguese);
//!
//!     let report = analyze(
//!         &corpus,
//!         &stopwords,
//!         &FilterConfig::new(),
//!         &AnalysisConfig::new().with_word_limit(Some(20)),
//!         &RakeConfig::new(),
//!     )?;
//!
//!     write_reports(&report, &corpus, &ReportConfig::new().with_output_dir("reports"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`ingest`] - Directory reading ([`read_chat_dir`](ingest::read_chat_dir))
//! - [`parsers`] - Message extraction ([`WhatsAppParser`](parsers::WhatsAppParser))
//! - [`parsing`] - Line grammar shared by the extractor and the table builder
//! - [`core`] - Table, filters, analyzers, pipeline and report writers
//! - [`stopwords`] - Built-in and custom stopword lists
//! - [`config`] - Configuration for each stage
//! - [`format`] - Output formats for the report tables
//! - [`message`] - [`RawMessage`] and [`MessageRecord`]
//! - [`error`] - Unified error types ([`ZapstatsError`], [`Result`])
//! - `cli` - CLI argument types (`cli` feature)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod ingest;
pub mod message;
pub mod parsers;
pub mod parsing;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use error::{Result, ZapstatsError};
pub use message::{MessageRecord, RawMessage};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use zapstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, RawMessage};

    pub use crate::error::{Result, ZapstatsError};

    pub use crate::config::{AnalysisConfig, IngestConfig, RakeConfig, ReportConfig};

    pub use crate::ingest::{ChatCorpus, read_chat_dir};

    pub use crate::parsers::WhatsAppParser;

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::keywords::{Rake, RankingMetric, rake_phrases};
    pub use crate::core::models::{MessageTable, WordCount};
    pub use crate::core::processor::{AnalysisReport, ProcessingStats, analyze};
    pub use crate::core::table::build_table;
    pub use crate::core::wordfreq::{common_words, word_count_table};

    pub use crate::core::output::{to_csv, write_csv, write_phrases, write_reports};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    #[cfg(feature = "xlsx-output")]
    pub use crate::core::output::{to_xlsx, write_xlsx};

    pub use crate::format::OutputFormat;
    pub use crate::stopwords::{Language, Stopwords};
}
