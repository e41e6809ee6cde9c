use std::fmt;

use crate::Operation;

/// Result type for medboard-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning an operation into a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation is addressed by an identifier but none was given
    MissingIdentifier(Operation),

    /// Semantic search was requested with an empty query
    MissingQuery,

    /// Write operation was requested without a form payload
    MissingPayload(Operation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingIdentifier(op) => write!(f, "{} requires an identifier", op.label()),
            Error::MissingQuery => write!(f, "search requires a non-empty query"),
            Error::MissingPayload(op) => write!(f, "{} requires a form payload", op.label()),
        }
    }
}

impl std::error::Error for Error {}
