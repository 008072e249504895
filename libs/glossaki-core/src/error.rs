//! Error types for glossaki-core.

use thiserror::Error;

/// Result type alias using AnswerKeyError.
pub type Result<T> = std::result::Result<T, AnswerKeyError>;

/// Errors that can occur while decoding a stored answer key.
#[derive(Debug, Error)]
pub enum AnswerKeyError {
    #[error("answer key is empty")]
    Empty,
}
