//! Error types for the stream codec.

use thiserror::Error;

/// Errors that can occur while reading pair streams.
#[derive(Debug, Error)]
pub enum InputError {
    /// The stream ended before the expected token.
    #[error("unexpected end of input: expected {0}")]
    UnexpectedEof(&'static str),

    /// A token that should be an integer was not.
    #[error("invalid {expected}: {token:?}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    /// A sequence count was negative.
    #[error("negative sequence count: {0}")]
    NegativeCount(i64),

    /// Tokens remained after both sequences were read.
    #[error("trailing input after both sequences, starting at {0:?}")]
    TrailingInput(String),

    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for codec results.
pub type InputResult<T> = Result<T, InputError>;
