//! Error types for the Yari library.
//!
//! All errors are represented by the [`YariError`] enum. Every error in
//! this crate is synchronous and recoverable by the caller; the library
//! performs no I/O of its own outside of explicit file-loading helpers.
//!
//! # Examples
//!
//! ```
//! use yari::error::{Result, YariError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(YariError::InvalidPattern)
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Yari operations.
///
/// The automaton lifecycle errors (`InvalidPattern`, `SealedAutomaton`,
/// `NotSealed`, `AlreadySealedWithPendingInserts`) reject misuse of the
/// open/sealed state machine explicitly instead of silently producing
/// degenerate results.
#[derive(Error, Debug)]
pub enum YariError {
    /// An empty pattern was supplied to `insert`. An empty pattern would
    /// trivially match every position and is almost certainly a caller
    /// mistake.
    #[error("invalid pattern: empty symbol sequence")]
    InvalidPattern,

    /// A pattern insertion was attempted after the automaton was sealed.
    #[error("automaton is sealed; no further patterns can be inserted")]
    SealedAutomaton,

    /// A scan was attempted before the automaton was sealed.
    #[error("automaton is not sealed; call seal() before scanning")]
    NotSealed,

    /// `seal` was called again while insertions are pending.
    #[error("automaton already sealed with pending inserts; reopen() and seal again")]
    AlreadySealedWithPendingInserts,

    /// I/O errors (text and dictionary file loading)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis / normalization errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with YariError.
pub type Result<T> = std::result::Result<T, YariError>;

impl YariError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        YariError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        YariError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        YariError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            YariError::InvalidPattern.to_string(),
            "invalid pattern: empty symbol sequence"
        );
        assert_eq!(
            YariError::NotSealed.to_string(),
            "automaton is not sealed; call seal() before scanning"
        );

        let error = YariError::analysis("bad codepoint");
        assert_eq!(error.to_string(), "Analysis error: bad codepoint");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let yari_error = YariError::from(io_error);

        match yari_error {
            YariError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
