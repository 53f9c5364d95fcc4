//! Error types for identifier generation.

use thiserror::Error;

/// Errors produced while generating an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The secure random source could not be read.
    #[error("secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),
    /// The selector does not name a known identifier kind.
    #[error("unknown identifier kind: {0:?}")]
    InvalidKind(String),
}
