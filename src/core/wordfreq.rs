//! Per-sender word frequency.
//!
//! Tokens are whitespace-separated words with `.` and `,` removed, compared
//! after capitalization (`gatos`, `Gatos` and `GATOS` all count as `Gatos`).
//! Media placeholders and stopwords never count.

use std::collections::HashMap;

use tracing::debug;

use crate::core::models::{MessageTable, WordCount};
use crate::stopwords::Stopwords;

/// Body WhatsApp writes in place of an attachment (compared lower-cased).
pub const MEDIA_OMITTED: &str = "<media omitted>";

/// Returns `true` if the message is an attachment placeholder.
pub fn is_media_placeholder(message: &str) -> bool {
    message.to_lowercase() == MEDIA_OMITTED
}

/// Most common words in `messages`, attributed to `sender`.
///
/// Results are ordered by descending count; equal counts keep the order in
/// which the words first appeared. `limit` of `None` returns every word.
///
/// # Example
///
/// ```rust
/// use zapstats::core::wordfreq::common_words;
/// use zapstats::stopwords::{Language, Stopwords};
///
/// let stopwords = Stopwords::for_language(Language::Portuguese);
/// let messages = ["Eu gosto de gatos.", "<Media omitted>", "Gatos são legais"];
/// let counts = common_words(messages, "Ana", Some(1), &stopwords);
///
/// assert_eq!(counts[0].word, "Gatos");
/// assert_eq!(counts[0].count, 2);
/// ```
pub fn common_words<I, S>(
    messages: I,
    sender: &str,
    limit: Option<usize>,
    stopwords: &Stopwords,
) -> Vec<WordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cleaned: Vec<String> = messages
        .into_iter()
        .map(|m| clean_message(m.as_ref()))
        .filter(|m| !is_media_placeholder(m))
        .collect();
    let text = cleaned.join(" ");

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in text.split_whitespace() {
        if stopwords.contains(token) {
            continue;
        }
        let word = capitalize(token);
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(limit) = limit {
        counts.truncate(limit);
    }

    counts
        .into_iter()
        .map(|(word, count)| WordCount::new(sender, word, count))
        .collect()
}

/// Runs [`common_words`] for every sender of the table, in order of first
/// appearance, and concatenates the results.
pub fn word_count_table(
    table: &MessageTable,
    limit: Option<usize>,
    stopwords: &Stopwords,
) -> Vec<WordCount> {
    let mut rows = Vec::new();
    for (sender, messages) in table.messages_by_sender() {
        let words = common_words(messages, sender, limit, stopwords);
        debug!(sender, words = words.len(), "counted words");
        rows.extend(words);
    }
    rows
}

/// Drops one trailing line break and every `.` and `,`.
fn clean_message(message: &str) -> String {
    let message = message.strip_suffix('\n').unwrap_or(message);
    message.replace(['.', ','], "")
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
