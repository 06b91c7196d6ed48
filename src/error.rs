//! Error type shared by the fallible entry points.

use thiserror::Error as ThisError;

/// Errors raised by configuration and record validation.
///
/// Geometric queries never fail; only malformed configuration or circle
/// records are rejected.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// A configuration or argument is out of its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A circle record violates one of its invariants.
    #[error("invalid circle: {0}")]
    InvalidCircle(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_circle(message: impl Into<String>) -> Self {
        Self::InvalidCircle(message.into())
    }
}
