//! Keyword phrases with RAKE (Rapid Automatic Keyword Extraction).
//!
//! Text is cut into sentences, sentences into lower-cased tokens, and every
//! maximal run of tokens that are neither stopwords nor punctuation becomes a
//! candidate phrase. Each word is scored from the co-occurrence graph of the
//! candidates; a phrase scores the sum of its words.
//!
//! # Example
//!
//! ```rust
//! use zapstats::config::RakeConfig;
//! use zapstats::core::keywords::Rake;
//! use zapstats::stopwords::{Language, Stopwords};
//!
//! let rake = Rake::new(Stopwords::for_language(Language::English), RakeConfig::new());
//! let ranked = rake.extract("Rust compiler errors are helpful. The compiler is fast.");
//!
//! assert_eq!(ranked[0].phrase, "rust compiler errors");
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RakeConfig;
use crate::core::wordfreq::is_media_placeholder;
use crate::stopwords::Stopwords;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+|[^\w\s]+").unwrap());

/// How a word is scored from its co-occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    /// degree / frequency; favors words that appear in long phrases
    #[default]
    DegreeToFrequencyRatio,
    /// degree alone
    WordDegree,
    /// frequency alone
    WordFrequency,
}

impl RankingMetric {
    /// Returns all metric names.
    pub fn all_names() -> &'static [&'static str] {
        &["ratio", "degree", "frequency"]
    }

    fn score(self, degree: usize, frequency: usize) -> f64 {
        match self {
            RankingMetric::DegreeToFrequencyRatio => degree as f64 / frequency as f64,
            RankingMetric::WordDegree => degree as f64,
            RankingMetric::WordFrequency => frequency as f64,
        }
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingMetric::DegreeToFrequencyRatio => write!(f, "degree/frequency"),
            RankingMetric::WordDegree => write!(f, "degree"),
            RankingMetric::WordFrequency => write!(f, "frequency"),
        }
    }
}

impl FromStr for RankingMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ratio" | "degree/frequency" => Ok(RankingMetric::DegreeToFrequencyRatio),
            "degree" => Ok(RankingMetric::WordDegree),
            "frequency" => Ok(RankingMetric::WordFrequency),
            _ => Err(format!(
                "Unknown metric: '{}'. Expected one of: {}",
                s,
                RankingMetric::all_names().join(", ")
            )),
        }
    }
}

/// A candidate phrase and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPhrase {
    pub phrase: String,
    pub score: f64,
}

/// RAKE extractor bound to a stopword list.
#[derive(Debug, Clone)]
pub struct Rake {
    stopwords: Stopwords,
    config: RakeConfig,
}

impl Rake {
    pub fn new(stopwords: Stopwords, config: RakeConfig) -> Self {
        Self { stopwords, config }
    }

    pub fn config(&self) -> &RakeConfig {
        &self.config
    }

    /// Ranks every candidate phrase of `text`, best first.
    ///
    /// Ties in score are ordered by phrase text, descending. Repeated
    /// phrases appear once per occurrence unless
    /// [`include_repeated_phrases`](RakeConfig::include_repeated_phrases) is
    /// off.
    pub fn extract(&self, text: &str) -> Vec<RankedPhrase> {
        let phrases = self.candidate_phrases(text);
        let scores = self.word_scores(&phrases);

        let mut ranked: Vec<RankedPhrase> = phrases
            .iter()
            .map(|words| RankedPhrase {
                phrase: words.join(" "),
                score: words.iter().map(|w| scores.get(w).copied().unwrap_or(0.0)).sum(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.phrase.cmp(&a.phrase))
        });

        debug!(phrases = ranked.len(), "ranked keyword phrases");
        ranked
    }

    /// Phrase texts of [`extract`](Self::extract), best first.
    pub fn ranked_phrases(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|p| p.phrase).collect()
    }

    fn candidate_phrases(&self, text: &str) -> Vec<Vec<String>> {
        let mut phrases: Vec<Vec<String>> = Vec::new();

        for sentence in SENTENCE_BREAK.split(text) {
            let mut current: Vec<String> = Vec::new();
            for token in TOKEN.find_iter(sentence) {
                let word = token.as_str().to_lowercase();
                if self.is_delimiter(&word) {
                    if !current.is_empty() {
                        phrases.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(word);
                }
            }
            if !current.is_empty() {
                phrases.push(current);
            }
        }

        let (min, max) = (self.config.min_length, self.config.max_length);
        phrases.retain(|p| (min..=max).contains(&p.len()));

        if !self.config.include_repeated_phrases {
            let mut seen = HashSet::new();
            phrases.retain(|p| seen.insert(p.clone()));
        }

        phrases
    }

    fn is_delimiter(&self, word: &str) -> bool {
        self.stopwords.contains(word) || !word.chars().any(char::is_alphanumeric)
    }

    fn word_scores(&self, phrases: &[Vec<String>]) -> HashMap<String, f64> {
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        let mut degree: HashMap<&str, usize> = HashMap::new();

        for phrase in phrases {
            for word in phrase {
                *frequency.entry(word.as_str()).or_default() += 1;
                *degree.entry(word.as_str()).or_default() += phrase.len();
            }
        }

        frequency
            .into_iter()
            .map(|(word, freq)| {
                let deg = degree.get(word).copied().unwrap_or(0);
                (word.to_string(), self.config.metric.score(deg, freq))
            })
            .collect()
    }
}

/// Top keyword phrases across `messages`.
///
/// Media placeholders are dropped, and every message is closed with a
/// sentence break so phrases never span two messages. Returns at most
/// `limit` phrases (`None` = all); empty input gives an empty list.
pub fn rake_phrases<I, S>(messages: I, limit: Option<usize>, rake: &Rake) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = sentence_text(messages);
    let mut phrases = rake.ranked_phrases(&text);
    if let Some(limit) = limit {
        phrases.truncate(limit);
    }
    phrases
}

/// Joins messages so each one ends with `".\n"`.
fn sentence_text<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for message in messages {
        let message = message.as_ref();
        let message = message.strip_suffix('\n').unwrap_or(message);
        if is_media_placeholder(message) {
            continue;
        }
        text.push_str(message);
        text.push_str(".\n");
    }
    text
}
