//! Stopword lists.
//!
//! Both analyzers take a [`Stopwords`] value as a parameter; nothing in the
//! crate reads a global list. Built-in lists are the NLTK Portuguese and
//! English corpora; custom lists can be loaded from a newline-delimited file.
//!
//! # Example
//!
//! ```rust
//! use zapstats::stopwords::{Language, Stopwords};
//!
//! let pt = Stopwords::for_language(Language::Portuguese);
//! assert!(pt.contains("de"));
//! assert!(pt.contains("Não"));
//! assert!(!pt.contains("gatos"));
//!
//! let custom = Stopwords::from_words(["foo", "bar"]);
//! assert_eq!(custom.len(), 2);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const PORTUGUESE: &str = include_str!("portuguese.txt");
const ENGLISH: &str = include_str!("english.txt");

/// Languages with a built-in stopword list.
///
/// # Example
///
/// ```rust
/// use zapstats::stopwords::Language;
/// use std::str::FromStr;
///
/// assert_eq!(Language::from_str("pt").unwrap(), Language::Portuguese);
/// assert_eq!(Language::from_str("English").unwrap(), Language::English);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Language {
    /// NLTK Portuguese list (207 words)
    #[default]
    #[serde(alias = "pt")]
    Portuguese,

    /// NLTK English list (179 words)
    #[serde(alias = "en")]
    English,
}

impl Language {
    /// Returns all language names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["portuguese", "pt", "english", "en"]
    }

    /// Returns all available languages.
    pub fn all() -> &'static [Language] {
        &[Language::Portuguese, Language::English]
    }

    fn word_list(self) -> &'static str {
        match self {
            Language::Portuguese => PORTUGUESE,
            Language::English => ENGLISH,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Portuguese => write!(f, "Portuguese"),
            Language::English => write!(f, "English"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portuguese" | "pt" => Ok(Language::Portuguese),
            "english" | "en" => Ok(Language::English),
            _ => Err(format!(
                "Unknown language: '{}'. Expected one of: {}",
                s,
                Language::all_names().join(", ")
            )),
        }
    }
}

/// A set of lower-case stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Built-in list for a language.
    pub fn for_language(language: Language) -> Self {
        Self::from_lines(language.word_list())
    }

    /// Builds a list from arbitrary words. Words are lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Loads a newline-delimited list. Blank lines and lines starting with
    /// `#` are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_lines(&content))
    }

    fn from_lines(content: &str) -> Self {
        Self::from_words(content.lines().filter(|l| !l.trim_start().starts_with('#')))
    }

    /// Returns `true` if the lower-cased form of `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
