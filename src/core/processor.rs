//! The analysis pipeline: extraction, table building, filtering and both
//! analyzers, with counts for each stage.
//!
//! # Example
//!
//! ```rust
//! use zapstats::config::{AnalysisConfig, RakeConfig};
//! use zapstats::core::filter::FilterConfig;
//! use zapstats::core::processor::analyze;
//! use zapstats::ingest::ChatCorpus;
//! use zapstats::stopwords::{Language, Stopwords};
//!
//! let corpus = ChatCorpus::from_text(
//!     "1/5/21, 9:03 PM - Ana: Eu gosto de gatos.\n\
//!      1/5/21, 9:04 PM - Ana: Gatos são legais",
//! );
//!
//! let report = analyze(
//!     &corpus,
//!     &Stopwords::for_language(Language::Portuguese),
//!     &FilterConfig::new(),
//!     &AnalysisConfig::new().with_min_messages(1),
//!     &RakeConfig::new(),
//! )?;
//!
//! assert_eq!(report.word_counts[0].word, "Gatos");
//! assert_eq!(report.stats.final_records, 2);
//! # Ok::<(), zapstats::ZapstatsError>(())
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{AnalysisConfig, RakeConfig};
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::keywords::{Rake, rake_phrases};
use crate::core::models::{MessageTable, WordCount};
use crate::core::table::build_table;
use crate::core::wordfreq::word_count_table;
use crate::error::{Result, ZapstatsError};
use crate::ingest::ChatCorpus;
use crate::parsers::WhatsAppParser;
use crate::stopwords::Stopwords;

/// Record counts at each stage of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Messages found by the extractor
    pub extracted: usize,
    /// Messages whose date or time didn't parse
    pub invalid: usize,
    /// Records removed by the date/sender filter
    pub filtered_out: usize,
    /// Senders dropped for having too few messages
    pub dropped_senders: Vec<String>,
    /// Records left for analysis
    pub final_records: usize,
}

impl ProcessingStats {
    /// Share of extracted messages that reached the analyzers, in percent.
    pub fn retention_ratio(&self) -> f64 {
        if self.extracted == 0 {
            return 0.0;
        }
        (self.final_records as f64 / self.extracted as f64) * 100.0
    }
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub table: MessageTable,
    pub word_counts: Vec<WordCount>,
    pub phrases: Vec<String>,
    pub stats: ProcessingStats,
}

/// Extracts messages from the corpus, builds the table, applies the record
/// filter and drops sparse senders, in that order.
///
/// # Errors
///
/// [`ZapstatsError::NoMessages`] when the extractor finds nothing or no
/// record survives the filters. Parse errors only when
/// [`skip_invalid`](AnalysisConfig::skip_invalid) is off.
pub fn prepare_table(
    corpus: &ChatCorpus,
    filter: &FilterConfig,
    config: &AnalysisConfig,
) -> Result<(MessageTable, ProcessingStats)> {
    let no_messages = || ZapstatsError::NoMessages {
        files: corpus.files.len(),
    };

    let raws = WhatsAppParser::new().parse_str(&corpus.text);
    if raws.is_empty() {
        return Err(no_messages());
    }

    let mut table = build_table(&raws, config.skip_invalid)?;
    let invalid = raws.len() - table.len();
    let filtered_out = apply_filters(&mut table, filter);
    let dropped_senders = table.drop_sparse_senders(config.min_messages);

    if !dropped_senders.is_empty() {
        info!(
            senders = ?dropped_senders,
            min_messages = config.min_messages,
            "dropped sparse senders"
        );
    }

    if table.is_empty() {
        return Err(no_messages());
    }

    let stats = ProcessingStats {
        extracted: raws.len(),
        invalid,
        filtered_out,
        dropped_senders,
        final_records: table.len(),
    };
    debug!(?stats, "prepared message table");

    Ok((table, stats))
}

/// Runs the whole pipeline over a corpus.
pub fn analyze(
    corpus: &ChatCorpus,
    stopwords: &Stopwords,
    filter: &FilterConfig,
    config: &AnalysisConfig,
    rake: &RakeConfig,
) -> Result<AnalysisReport> {
    let (table, stats) = prepare_table(corpus, filter, config)?;

    let word_counts = word_count_table(&table, config.word_limit, stopwords);
    let rake = Rake::new(stopwords.clone(), rake.clone());
    let phrases = rake_phrases(table.messages(), config.phrase_limit, &rake);

    Ok(AnalysisReport {
        table,
        word_counts,
        phrases,
        stats,
    })
}
