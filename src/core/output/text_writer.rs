//! Plain-text writer for keyword phrases.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Writes each phrase followed by a blank line.
pub fn write_phrases<S: AsRef<str>>(phrases: &[S], path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_phrases_text(phrases))?;
    Ok(())
}

/// Renders phrases the way [`write_phrases`] writes them.
pub fn to_phrases_text<S: AsRef<str>>(phrases: &[S]) -> String {
    let mut text = String::new();
    for phrase in phrases {
        text.push_str(phrase.as_ref());
        text.push_str("\n\n");
    }
    text
}
