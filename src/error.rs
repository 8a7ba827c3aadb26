//! Unified error types for zapstats.
//!
//! This module provides a single [`ZapstatsError`] enum that covers all error
//! cases in the library, following the pattern used by crates like
//! `serde_json` and `csv`.
//!
//! # Error Handling Policy
//!
//! - Malformed input files and records are reported and skipped by default;
//!   they only surface as errors in strict mode
//! - A run that extracts zero messages fails with [`ZapstatsError::NoMessages`]
//!   instead of writing empty reports
//! - Every variant keeps its source error for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for zapstats operations.
///
/// # Example
///
/// ```rust
/// use zapstats::error::Result;
/// use zapstats::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZapstatsError>;

/// The error type for all zapstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZapstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An output directory doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing reports)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input directory could not be listed.
    #[error("Cannot read chat directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was requested
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// A chat export file is not valid UTF-8.
    #[error("UTF-8 encoding error in {}: {source}", path.display())]
    Utf8 {
        /// Offending file
        path: PathBuf,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A chat export file has no line break, so its header line cannot be
    /// stripped.
    #[error("Missing export header in {}: file has no line break", path.display())]
    MissingHeader {
        /// Offending file
        path: PathBuf,
    },

    /// Failed to parse part of the input.
    #[error("Failed to parse {what}: {source}")]
    Parse {
        /// What was being parsed (e.g., "message time", "message month")
        what: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
    },

    /// No messages survived extraction or filtering.
    #[error("No messages found in {files} chat file(s). Make sure they are WhatsApp exports in the `M/D/YY, H:MM AM - Sender: Message` format.")]
    NoMessages {
        /// Number of files that were read
        files: usize,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A configuration value or requested format is not usable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Excel workbook writing error.
    #[cfg(feature = "xlsx-output")]
    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// Time-of-day did not match `H:MM AM|PM`
    #[error("invalid time '{0}', expected H:MM AM|PM")]
    Time(String),
    /// A numeric date field did not parse
    #[error("invalid number '{value}': {source}")]
    Number {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ZapstatsError {
    /// Creates a parse error for a message time field.
    pub fn time_parse(value: impl Into<String>, record: usize) -> Self {
        ZapstatsError::Parse {
            what: "message time",
            source: ParseErrorKind::Time(format!("{} (record {record})", value.into())),
        }
    }

    /// Creates a parse error for a numeric date field.
    pub fn number_parse(
        what: &'static str,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        ZapstatsError::Parse {
            what,
            source: ParseErrorKind::Number {
                value: value.into(),
                source,
            },
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ZapstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ZapstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error (including directory errors).
    pub fn is_io(&self) -> bool {
        matches!(self, ZapstatsError::Io(_) | ZapstatsError::ReadDir { .. })
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ZapstatsError::Parse { .. })
    }

    /// Returns `true` if this error is about a malformed input file.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ZapstatsError::Utf8 { .. } | ZapstatsError::MissingHeader { .. }
        )
    }

    /// Returns `true` if the run produced no messages.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ZapstatsError::NoMessages { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ZapstatsError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
