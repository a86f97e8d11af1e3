//! Error types for sequence building and cursor position queries.

use std::io;
use std::time::Duration;

/// Errors from the symbolic sequence catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("Unknown sequence: {0}")]
    UnknownSequence(String),

    #[error("Sequence '{name}' takes {expected} parameter(s), got {got}")]
    InvalidParameter {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Errors that can occur while querying the terminal for the cursor position.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Terminal input unavailable: {reason}")]
    IoUnavailable { reason: String },

    #[error("Unrecognized cursor position report: {:?}", String::from_utf8_lossy(.raw))]
    ResponseParse { raw: Vec<u8> },

    #[error("No cursor position report within {0:?}")]
    Timeout(Duration),

    #[error("Cursor position query cancelled")]
    Cancelled,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl QueryError {
    /// Create an IoUnavailable error from anything printable.
    pub fn unavailable(reason: impl ToString) -> Self {
        Self::IoUnavailable {
            reason: reason.to_string(),
        }
    }

    /// The bytes received from the terminal, if this is a parse failure.
    pub fn raw_response(&self) -> Option<&[u8]> {
        match self {
            Self::ResponseParse { raw } => Some(raw),
            _ => None,
        }
    }
}
