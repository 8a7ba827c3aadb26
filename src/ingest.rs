//! Reads a directory of chat exports into one text blob.
//!
//! Every WhatsApp export starts with a line that is not part of the
//! conversation, so the first line of each file is discarded. Files are read
//! in lexicographic order of their names so the blob is the same on every
//! platform.
//!
//! # Example
//!
//! ```rust,no_run
//! use zapstats::config::IngestConfig;
//! use zapstats::ingest::read_chat_dir;
//!
//! let corpus = read_chat_dir("./chats", &IngestConfig::new())?;
//! for skipped in &corpus.skipped {
//!     eprintln!("skipped {}: {}", skipped.path.display(), skipped.reason);
//! }
//! println!("{} bytes from {} files", corpus.text.len(), corpus.files.len());
//! # Ok::<(), zapstats::ZapstatsError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::IngestConfig;
use crate::error::{Result, ZapstatsError};

/// File name used when the concatenated text is persisted.
pub const RAW_TEXT_FILE: &str = "all_chat_data.txt";

/// The concatenated conversation text of a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatCorpus {
    /// Conversation text with each file's header line removed.
    pub text: String,
    /// Files that contributed to `text`, in read order.
    pub files: Vec<PathBuf>,
    /// Files that were skipped and why.
    pub skipped: Vec<SkippedFile>,
}

/// A file left out of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl ChatCorpus {
    /// Wraps text that did not come from a directory, such as a single
    /// export with its header already removed.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Writes the text to `path`.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, &self.text)?;
        Ok(())
    }

    /// Appends one file's content, header already removed.
    fn push(&mut self, path: PathBuf, conversation: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(conversation);
        self.files.push(path);
    }
}

/// Reads every regular file in `dir` and concatenates their conversations.
///
/// Files that are not UTF-8 or have no line break are skipped with a
/// warning, unless `config.strict` is set, in which case the first such file
/// aborts the read.
pub fn read_chat_dir(dir: impl AsRef<Path>, config: &IngestConfig) -> Result<ChatCorpus> {
    let dir = dir.as_ref();
    let mut corpus = ChatCorpus::default();

    for path in list_files(dir)? {
        match read_conversation(&path) {
            Ok(conversation) => {
                debug!(file = %path.display(), bytes = conversation.len(), "read chat file");
                corpus.push(path, &conversation);
            }
            Err(err) if !config.strict && err.is_malformed_input() => {
                warn!(file = %path.display(), "skipping chat file: {err}");
                corpus.skipped.push(SkippedFile {
                    path,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(corpus)
}

/// Regular files directly inside `dir`, sorted by file name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source: std::io::Error| ZapstatsError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if entry.file_type().map_err(read_dir_err)?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads one export and drops everything up to and including its first
/// line break.
fn read_conversation(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|source| ZapstatsError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;

    match content.split_once('\n') {
        Some((_header, rest)) => Ok(rest.to_string()),
        None => Err(ZapstatsError::MissingHeader {
            path: path.to_path_buf(),
        }),
    }
}
