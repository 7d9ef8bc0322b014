//! Error types for the enigma decoder.

use thiserror::Error;

/// Result type alias using [`EnigmaError`].
pub type Result<T> = std::result::Result<T, EnigmaError>;

/// Why a dictionary key was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefect {
    #[error("key is empty")]
    Empty,
    #[error("digit {0:?} is outside 1-9")]
    BadDigit(char),
    #[error("key is already present")]
    Duplicate,
}

/// Decoder failures.
///
/// All of them are raised before any output is assembled, so a failed
/// decode never leaves a partial result behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A dictionary key is malformed or collides with an earlier key.
    #[error("invalid dictionary key {key:?}: {defect}")]
    InvalidDictionary { key: String, defect: KeyDefect },

    /// The message contains a digit outside 1-9.
    #[error("invalid message digit {digit} at position {position}")]
    InvalidInput { position: usize, digit: u8 },

    /// More than one dictionary entry matches the same candidate window.
    #[error("ambiguous dictionary: {matches} entries match {candidate:?}")]
    AmbiguousDictionary { candidate: String, matches: usize },
}

impl EnigmaError {
    pub(crate) fn invalid_key(key: impl Into<String>, defect: KeyDefect) -> Self {
        EnigmaError::InvalidDictionary {
            key: key.into(),
            defect,
        }
    }
}
