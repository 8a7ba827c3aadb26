//! `WhatsApp` TXT message extractor.
//!
//! A single pass over the text, line by line:
//! - a header line starts a new message
//! - any other line continues the current message body
//! - a timestamped system notice closes the current message and is dropped,
//!   together with its own continuation lines
//!
//! The last message is bounded by the end of the input, so it is never lost.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::message::RawMessage;
use crate::parsing::whatsapp::{LineKind, classify_line};

/// Extractor for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use zapstats::parsers::WhatsAppParser;
///
/// let text = "1/5/21, 9:03 PM - Ana: oi\ntudo bem?\n1/5/21, 9:04 PM - Bruno: tudo!";
/// let messages = WhatsAppParser::new().parse_str(text);
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].body, "oi\ntudo bem?");
/// assert_eq!(messages[1].sender, "Bruno");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppParser;

/// What a scan saw besides the messages themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Timestamped lines without a sender.
    pub notices: usize,
    /// Lines before the first message or after a notice.
    pub orphan_lines: usize,
}

impl WhatsAppParser {
    pub fn new() -> Self {
        Self
    }

    /// Extracts messages from a file. The file is read whole; no header
    /// stripping happens here.
    pub fn parse(&self, path: &Path) -> Result<Vec<RawMessage>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Extracts messages from text, in source order.
    pub fn parse_str(&self, content: &str) -> Vec<RawMessage> {
        let (messages, stats) = self.scan(content);
        debug!(
            messages = messages.len(),
            notices = stats.notices,
            orphan_lines = stats.orphan_lines,
            "extracted messages"
        );
        messages
    }

    /// Extracts messages and reports what was skipped.
    pub fn scan(&self, content: &str) -> (Vec<RawMessage>, ScanStats) {
        let mut messages: Vec<RawMessage> = Vec::new();
        let mut stats = ScanStats::default();
        // false after a notice, until the next header
        let mut in_message = false;

        for line in content.lines() {
            match classify_line(line) {
                LineKind::Message {
                    month,
                    day,
                    year,
                    time,
                    sender,
                    body,
                } => {
                    messages.push(RawMessage::new(month, day, year, time, sender, body));
                    in_message = true;
                }
                LineKind::Notice => {
                    stats.notices += 1;
                    in_message = false;
                }
                LineKind::Continuation => match messages.last_mut() {
                    Some(last) if in_message => {
                        last.body.push('\n');
                        last.body.push_str(line);
                    }
                    _ => stats.orphan_lines += 1,
                },
            }
        }

        // A blank line right before the next header belongs to the export
        // layout, not the message.
        for msg in &mut messages {
            while msg.body.ends_with('\n') {
                msg.body.pop();
            }
        }

        (messages, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: &str = "\
12/24/20, 10:00 PM - Ana: Feliz Natal!
12/24/20, 10:01 PM - Bruno: Feliz Natal pra vocês
com muito amor
e saúde
12/24/20, 10:02 PM - Carla joined using this group's invite link
12/24/20, 10:03 PM - Carla: <Media omitted>
12/24/20, 10:04 PM - Ana: última mensagem";

    #[test]
    fn test_counts_every_header_including_last() {
        let messages = WhatsAppParser::new().parse_str(CHAT);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[3].body, "última mensagem");
    }

    #[test]
    fn test_multiline_body() {
        let messages = WhatsAppParser::new().parse_str(CHAT);
        assert_eq!(messages[1].body, "Feliz Natal pra vocês\ncom muito amor\ne saúde");
    }

    #[test]
    fn test_notice_closes_message() {
        let (messages, stats) = WhatsAppParser::new().scan(CHAT);
        assert_eq!(stats.notices, 1);
        assert!(messages.iter().all(|m| !m.body.contains("joined")));
        assert_eq!(messages[2].sender, "Carla");
    }

    #[test]
    fn test_lines_after_notice_are_orphans() {
        let text = "1/1/21, 1:00 AM - Ana: oi\n1/1/21, 1:01 AM - You changed the subject\nnovo nome\n1/1/21, 1:02 AM - Ana: tchau";
        let (messages, stats) = WhatsAppParser::new().scan(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "oi");
        assert_eq!(stats.orphan_lines, 1);
    }

    #[test]
    fn test_text_before_first_header_dropped() {
        let text = "Messages to this group are now secured\n1/1/21, 1:00 AM - Ana: oi";
        let (messages, stats) = WhatsAppParser::new().scan(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(stats.orphan_lines, 1);
    }

    #[test]
    fn test_crlf_and_trailing_newlines() {
        let text = "1/1/21, 1:00 AM - Ana: oi\r\n\r\n1/1/21, 1:01 AM - Bruno: olá\r\n";
        let messages = WhatsAppParser::new().parse_str(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "oi");
        assert_eq!(messages[1].body, "olá");
    }

    #[test]
    fn test_no_messages() {
        assert!(WhatsAppParser::new().parse_str("").is_empty());
        assert!(WhatsAppParser::new().parse_str("just some text\nmore").is_empty());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, CHAT.as_bytes()).unwrap();

        let messages = WhatsAppParser::new().parse(file.path()).unwrap();
        assert_eq!(messages, WhatsAppParser::new().parse_str(CHAT));
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn test_parse_file_keeps_first_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"1/1/21, 1:00 AM - Ana: primeira").unwrap();

        let messages = WhatsAppParser::new().parse(file.path()).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "primeira");
    }

    #[test]
    fn test_parse_missing_file() {
        let err = WhatsAppParser::new()
            .parse(Path::new("/nonexistent/chat.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_raw_fields() {
        let messages = WhatsAppParser::new().parse_str(CHAT);
        let first = &messages[0];
        assert_eq!(first.month, "12");
        assert_eq!(first.day, "24");
        assert_eq!(first.year, "20");
        assert_eq!(first.time, "10:00 PM");
        assert_eq!(first.sender, "Ana");
    }
}
