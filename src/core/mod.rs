//! Core processing logic for zapstats.
//!
//! This module contains:
//! - [`models`] - The message table and word counts
//! - [`table`] - Typed table from raw captures
//! - [`filter`] - Record filtering by date and sender
//! - [`wordfreq`] - Per-sender word frequency
//! - [`keywords`] - RAKE keyword phrases
//! - [`processor`] - The pipeline and its statistics
//! - [`output`] - Report writers (CSV, JSON, JSONL, XLSX, text)
//!
//! # Quick Start
//!
//! ```rust
//! use zapstats::core::{
//!     FilterConfig, MessageTable, WordCount,
//!     apply_filters, build_table, common_words, rake_phrases, word_count_table,
//! };
//! ```

pub mod filter;
pub mod keywords;
pub mod models;
pub mod output;
pub mod processor;
pub mod table;
pub mod wordfreq;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use keywords::{Rake, RankedPhrase, RankingMetric, rake_phrases};
pub use models::{MessageTable, WordCount};
pub use processor::{AnalysisReport, ProcessingStats, analyze, prepare_table};
pub use table::build_table;
pub use wordfreq::{common_words, word_count_table};

pub use output::{to_csv, write_csv, write_phrases, write_reports};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
#[cfg(feature = "xlsx-output")]
pub use output::{to_xlsx, write_xlsx};
