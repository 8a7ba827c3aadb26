//! Filter table records by date range and sender.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Records from one sender |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveTime;
//! use zapstats::MessageRecord;
//! use zapstats::core::MessageTable;
//! use zapstats::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> zapstats::Result<()> {
//! let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
//! let mut table = MessageTable::new(vec![
//!     MessageRecord::new(1, 1, 21, noon, "Ana", "Feliz ano novo"),
//!     MessageRecord::new(6, 15, 21, noon, "Ana", "Bom São João"),
//! ]);
//!
//! let config = FilterConfig::new().with_date_from("2021-06-01")?;
//! apply_filters(&mut table, &config);
//!
//! assert_eq!(table.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records with an impossible date are **excluded** when date filters are active
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::models::MessageTable;
use crate::error::ZapstatsError;
use crate::message::MessageRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Criteria for keeping table records.
///
/// A record must match every active filter to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep records on or after this date.
    pub after: Option<NaiveDate>,

    /// Keep records on or before this date.
    pub before: Option<NaiveDate>,

    /// Keep records from this sender only (case-insensitive).
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a filter with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ZapstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ZapstatsError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive) from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ZapstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ZapstatsError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.sender.is_some()
    }

    /// Returns `true` if a date filter is active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if let Some(ref sender) = self.sender {
            if !record.sender.eq_ignore_ascii_case(sender) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(date) = record.date() else {
                return false;
            };
            if self.after.is_some_and(|after| date < after) {
                return false;
            }
            if self.before.is_some_and(|before| date > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ZapstatsError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| ZapstatsError::invalid_date(date_str))
}

/// Drops the table records that don't match `config`.
///
/// Returns the number of records removed. An inactive filter leaves the
/// table untouched.
pub fn apply_filters(table: &mut MessageTable, config: &FilterConfig) -> usize {
    if !config.is_active() {
        return 0;
    }

    let before = table.len();
    table.retain(|record| config.matches(record));
    let removed = before - table.len();

    debug!(removed, kept = table.len(), "applied record filters");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn record(sender: &str, message: &str, (m, d, y): (u32, u32, u32)) -> MessageRecord {
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        MessageRecord::new(m, d, y, time, sender, message)
    }

    #[test]
    fn test_filter_by_sender() {
        let mut table = MessageTable::new(vec![
            record("Ana", "oi", (1, 1, 21)),
            record("Bruno", "olá", (1, 1, 21)),
            record("ana", "tchau", (1, 1, 21)),
        ]);

        let removed = apply_filters(&mut table, &FilterConfig::new().with_sender("ANA"));

        assert_eq!(removed, 1);
        assert!(table.iter().all(|r| r.sender.eq_ignore_ascii_case("ana")));
    }

    #[test]
    fn test_filter_by_date_range_inclusive() {
        let mut table = MessageTable::new(vec![
            record("Ana", "antes", (5, 31, 21)),
            record("Ana", "início", (6, 1, 21)),
            record("Ana", "fim", (6, 30, 21)),
            record("Ana", "depois", (7, 1, 21)),
        ]);

        let config = FilterConfig::new()
            .with_date_from("2021-06-01")
            .unwrap()
            .with_date_to("2021-06-30")
            .unwrap();
        apply_filters(&mut table, &config);

        let kept: Vec<&str> = table.messages().collect();
        assert_eq!(kept, vec!["início", "fim"]);
    }

    #[test]
    fn test_impossible_date_excluded_when_date_filter() {
        let mut table = MessageTable::new(vec![
            record("Ana", "ok", (6, 15, 21)),
            record("Ana", "bad", (2, 30, 21)),
        ]);

        apply_filters(&mut table, &FilterConfig::new().with_date_from("2021-01-01").unwrap());

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].message, "ok");
    }

    #[test]
    fn test_impossible_date_kept_without_date_filter() {
        let mut table = MessageTable::new(vec![record("Ana", "bad", (2, 30, 21))]);
        apply_filters(&mut table, &FilterConfig::new().with_sender("Ana"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01/01/2021");
        assert!(matches!(result, Err(ZapstatsError::InvalidDate { .. })));
    }

    #[test]
    fn test_combined_filters() {
        let mut table = MessageTable::new(vec![
            record("Ana", "velha", (1, 1, 21)),
            record("Ana", "nova", (6, 15, 21)),
            record("Bruno", "nova", (6, 15, 21)),
        ]);

        let config = FilterConfig::new()
            .with_date_from("2021-06-01")
            .unwrap()
            .with_sender("Ana");
        apply_filters(&mut table, &config);

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].sender, "Ana");
        assert_eq!(table.records()[0].message, "nova");
    }

    #[test]
    fn test_inactive_filter_is_noop() {
        let mut table = MessageTable::new(vec![record("Ana", "bad", (2, 30, 21))]);
        assert_eq!(apply_filters(&mut table, &FilterConfig::new()), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_sender("Ana").is_active());
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert!(FilterConfig::new().with_after(date).is_active());
        assert!(FilterConfig::new().with_before(date).has_date_filter());
    }
}
