use std::num::ParseIntError;
use thiserror::Error;

/// A command that could not be carried out. The display text of each kind
/// is the message shown to the user, verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DukeError {
    /// Unknown command key, wrong number of arguments or an index out of range.
    #[error("{0}")]
    InvalidCommand(String),

    /// A token that should have been an integer.
    #[error("'{token}' is not a valid number!")]
    MalformedNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A `/by`, `/from` or `/to` marker is absent or misplaced.
    #[error("{0}")]
    MissingMarker(String),
}

impl DukeError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DukeError::InvalidCommand(message.into())
    }

    pub fn missing_marker(message: impl Into<String>) -> Self {
        DukeError::MissingMarker(message.into())
    }

    pub fn to_error_code(&self) -> &'static str {
        match self {
            DukeError::InvalidCommand(_) => "INVALID_COMMAND",
            DukeError::MalformedNumber { .. } => "MALFORMED_NUMBER",
            DukeError::MissingMarker(_) => "MISSING_MARKER",
        }
    }
}

pub type Result<T> = std::result::Result<T, DukeError>;
