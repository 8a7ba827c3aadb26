//! Conversion of raw captures into the typed message table.

use tracing::{debug, warn};

use crate::core::models::MessageTable;
use crate::error::{Result, ZapstatsError};
use crate::message::{MessageRecord, RawMessage};
use crate::parsing::whatsapp::parse_time;

/// Builds the message table from raw captures.
///
/// Month, day and year must be unsigned integers and the time must read as
/// `H:MM AM|PM`. With `skip_invalid`, records that fail either check are
/// logged and left out; otherwise the first failure is returned.
///
/// # Example
///
/// ```rust
/// use zapstats::RawMessage;
/// use zapstats::core::table::build_table;
///
/// let raws = vec![RawMessage::new("1", "5", "21", "9:03 PM", "Ana", "oi")];
/// let table = build_table(&raws, true)?;
///
/// assert_eq!(table.records()[0].time_string(), "21:03:00");
/// # Ok::<(), zapstats::ZapstatsError>(())
/// ```
pub fn build_table(raws: &[RawMessage], skip_invalid: bool) -> Result<MessageTable> {
    let mut records = Vec::with_capacity(raws.len());
    let mut skipped = 0usize;

    for (index, raw) in raws.iter().enumerate() {
        match to_record(raw, index) {
            Ok(record) => records.push(record),
            Err(err) if skip_invalid => {
                warn!(record = index, "skipping message: {err}");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(records = records.len(), skipped, "built message table");
    Ok(MessageTable::new(records))
}

fn to_record(raw: &RawMessage, index: usize) -> Result<MessageRecord> {
    let number = |what: &'static str, value: &str| {
        value
            .parse::<u32>()
            .map_err(|source| ZapstatsError::number_parse(what, value, source))
    };

    let month = number("message month", &raw.month)?;
    let day = number("message day", &raw.day)?;
    let year = number("message year", &raw.year)?;
    let time = parse_time(&raw.time).ok_or_else(|| ZapstatsError::time_parse(&raw.time, index))?;

    Ok(MessageRecord::new(
        month,
        day,
        year,
        time,
        raw.sender.clone(),
        raw.body.clone(),
    ))
}
