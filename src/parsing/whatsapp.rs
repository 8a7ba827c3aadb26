//! Line grammar for WhatsApp TXT exports (US locale, 12-hour clock).
//!
//! A message header looks like:
//!
//! ```text
//! 3/14/21, 9:05 PM - Ana: Bom dia!
//! ```
//!
//! Newer exports put a narrow no-break space (U+202F) before `AM`/`PM`; both
//! spellings are accepted. A timestamped line without a `Sender: ` part is a
//! system notice (joins, leaves, encryption banner).

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

/// `M/D/Y, H:MM AM|PM - ` at the start of a line; captures month, day,
/// year, time and everything after the dash.
const HEADER_PATTERN: &str =
    r"^(\d{1,2})/(\d{1,2})/(\d{1,4}),\s(\d{1,2}:\d{2}\s(?i:[AP]M))\s-\s(.*)$";

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEADER_PATTERN).unwrap());

/// chrono format for the captured time field (after [`normalize_time`]).
pub const TIME_PARSE_FORMAT: &str = "%I:%M %p";

/// How a single export line should be treated by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new message.
    Message {
        month: &'a str,
        day: &'a str,
        year: &'a str,
        time: &'a str,
        sender: &'a str,
        body: &'a str,
    },
    /// Timestamped line with no sender.
    Notice,
    /// Anything else: part of the previous message body.
    Continuation,
}

/// Classifies one line (without its line terminator).
pub fn classify_line(line: &str) -> LineKind<'_> {
    let Some(caps) = HEADER.captures(line) else {
        return LineKind::Continuation;
    };

    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let rest = field(5);

    match split_sender(rest) {
        Some((sender, body)) => LineKind::Message {
            month: field(1),
            day: field(2),
            year: field(3),
            time: field(4),
            sender,
            body,
        },
        None => LineKind::Notice,
    }
}

/// Splits `Sender: body` at the first `": "`.
///
/// A line ending in a bare `:` is a message with an empty body.
fn split_sender(rest: &str) -> Option<(&str, &str)> {
    if let Some((sender, body)) = rest.split_once(": ") {
        return Some((sender, body));
    }
    rest.strip_suffix(':').map(|sender| (sender, ""))
}

/// Returns `true` if the line carries a timestamp prefix.
pub fn is_header(line: &str) -> bool {
    HEADER.is_match(line)
}

/// Returns `true` if the line is a timestamped system notice.
pub fn is_system_notice(line: &str) -> bool {
    matches!(classify_line(line), LineKind::Notice)
}

/// Folds any whitespace to ASCII spaces and upper-cases the meridiem.
pub fn normalize_time(time: &str) -> String {
    time.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Parses `H:MM AM|PM` into a time of day.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(&normalize_time(time), TIME_PARSE_FORMAT).ok()
}
