use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("missing {0} token")]
    MissingToken(&'static str),

    #[error("invalid integer token: {0:?}")]
    InvalidInteger(String),

    #[error("trailing token: {0:?}")]
    TrailingToken(String),
}
