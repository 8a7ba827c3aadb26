//! Message types produced by the extractor and the table builder.
//!
//! - [`RawMessage`] is what the line scanner captures, as text, in source order
//! - [`MessageRecord`] is one typed row of the message table
//!
//! # Examples
//!
//! ```
//! use zapstats::MessageRecord;
//! use chrono::NaiveTime;
//!
//! let time = NaiveTime::from_hms_opt(21, 5, 0).unwrap();
//! let record = MessageRecord::new(3, 14, 21, time, "Ana", "Bom dia!");
//!
//! assert_eq!(record.sender, "Ana");
//! assert_eq!(record.time_string(), "21:05:00");
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Time-of-day rendering used in every report.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One message exactly as captured from the export text.
///
/// Every field is kept as text; conversion to typed values happens in
/// [`build_table`](crate::core::table::build_table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub month: String,
    pub day: String,
    pub year: String,
    /// `H:MM AM|PM`, as written in the export
    pub time: String,
    pub sender: String,
    /// Message text. Continuation lines are joined with `\n`; there is no
    /// trailing line break.
    pub body: String,
}

impl RawMessage {
    /// Creates a raw message from its captured parts.
    pub fn new(
        month: impl Into<String>,
        day: impl Into<String>,
        year: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            day: day.into(),
            year: year.into(),
            time: time.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Renders the message back into export form:
    /// `M/D/Y, H:MM AM - Sender: body`.
    pub fn to_export_line(&self) -> String {
        format!(
            "{}/{}/{}, {} - {}: {}",
            self.month, self.day, self.year, self.time, self.sender, self.body
        )
    }
}

/// One row of the message table.
///
/// Serializes with the column names `month`, `day`, `year`, `time`,
/// `sender`, `message`; `time` is written as `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub month: u32,
    pub day: u32,
    /// Year as written in the export (usually two digits).
    pub year: u32,
    #[serde(with = "time_of_day")]
    pub time: NaiveTime,
    pub sender: String,
    pub message: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        month: u32,
        day: u32,
        year: u32,
        time: NaiveTime,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            month,
            day,
            year,
            time,
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Calendar date of the message.
    ///
    /// Years below 100 are read as 20YY. Returns `None` for impossible dates
    /// such as `2/30/21`.
    pub fn date(&self) -> Option<NaiveDate> {
        let year = if self.year < 100 {
            2000 + self.year
        } else {
            self.year
        };
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, self.month, self.day)
    }

    /// Time of day rendered as `HH:MM:SS`.
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
