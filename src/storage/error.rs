//! Error types for the record stores and the text codec.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of record a store holds, used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Member,
    Workout,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Member => write!(f, "Member"),
            RecordKind::Workout => write!(f, "Workout"),
        }
    }
}

/// Errors raised while decoding a persisted record file.
///
/// Every variant carries the 1-based line number where decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The file ended in the middle of a record
    #[error("line {line}: expected `{label}` but the file ended")]
    MissingField { line: usize, label: &'static str },

    /// A field line did not start with the label expected at that position
    #[error("line {line}: expected `{label}`, found {found:?}")]
    UnexpectedLabel {
        line: usize,
        label: &'static str,
        found: String,
    },

    /// A numeric field could not be parsed
    #[error("line {line}: invalid number {value:?} for `{label}`")]
    InvalidNumber {
        line: usize,
        label: &'static str,
        value: String,
    },

    /// A date field was not an ISO-8601 calendar date
    #[error("line {line}: invalid date {value:?}")]
    InvalidDate { line: usize, value: String },

    /// A member status other than Active or Inactive
    #[error("line {line}: unknown member status {value:?}")]
    InvalidStatus { line: usize, value: String },
}

impl CodecError {
    /// Line number at which decoding stopped.
    pub fn line(&self) -> usize {
        match self {
            CodecError::MissingField { line, .. }
            | CodecError::UnexpectedLabel { line, .. }
            | CodecError::InvalidNumber { line, .. }
            | CodecError::InvalidDate { line, .. }
            | CodecError::InvalidStatus { line, .. } => *line,
        }
    }
}

/// Errors surfaced by the member and workout stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Lookup by id on an absent record
    #[error("{kind} not found with ID: {id}")]
    NotFound { kind: RecordKind, id: u32 },

    /// Every id up to `u32::MAX` is taken
    #[error("No {kind} IDs left to assign")]
    IdsExhausted { kind: RecordKind },

    /// A text field contains a line break, which the line format cannot hold
    #[error("{kind} {field} must be a single line")]
    MultilineText {
        kind: RecordKind,
        field: &'static str,
    },

    /// The persisted file contains a record that cannot be decoded
    #[error("Malformed record in {}: {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The persisted file could not be read or written
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether this is a lookup miss rather than a storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
