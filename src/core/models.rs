//! Core data models: the message table and per-sender word counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;

/// Ordered table of typed message records.
///
/// Records keep the order in which they appeared in the exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    records: Vec<MessageRecord>,
}

impl MessageTable {
    /// Creates a table from records already in source order.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Message texts of every record, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.message.as_str())
    }

    /// Message texts grouped by sender in one pass. Senders come in order of
    /// first appearance, messages in table order.
    pub fn messages_by_sender(&self) -> Vec<(&str, Vec<&str>)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

        for record in &self.records {
            let i = *index.entry(record.sender.as_str()).or_insert_with(|| {
                groups.push((record.sender.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[i].1.push(record.message.as_str());
        }

        groups
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        self.sender_counts()
            .into_iter()
            .map(|(sender, _)| sender)
            .collect()
    }

    /// Number of records per sender, in order of first appearance.
    pub fn sender_counts(&self) -> Vec<(&str, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for record in &self.records {
            match index.get(record.sender.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(&record.sender, counts.len());
                    counts.push((&record.sender, 1));
                }
            }
        }

        counts
    }

    /// Removes every record whose sender has fewer than `min` records.
    ///
    /// Returns the dropped senders in order of first appearance. Senders at
    /// or above the threshold keep all their records, in order.
    pub fn drop_sparse_senders(&mut self, min: usize) -> Vec<String> {
        let dropped: Vec<String> = self
            .sender_counts()
            .into_iter()
            .filter(|&(_, count)| count < min)
            .map(|(sender, _)| sender.to_string())
            .collect();

        if !dropped.is_empty() {
            self.records.retain(|r| !dropped.contains(&r.sender));
        }

        dropped
    }

    /// Keeps only the records matching `keep`.
    pub fn retain(&mut self, keep: impl FnMut(&MessageRecord) -> bool) {
        self.records.retain(keep);
    }
}

impl From<Vec<MessageRecord>> for MessageTable {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a MessageTable {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// How often one sender used one word.
///
/// Serializes with the column names `sender`, `message`, `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub sender: String,
    /// Capitalized word
    #[serde(rename = "message")]
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(sender: impl Into<String>, word: impl Into<String>, count: usize) -> Self {
        Self {
            sender: sender.into(),
            word: word.into(),
            count,
        }
    }
}
