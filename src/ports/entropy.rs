//! Entropy port supplying cryptographically secure random bytes.

use crate::error::GeneratorError;

/// Fills buffers with cryptographically secure random bytes.
///
/// Implementations must fail rather than fall back to a weaker generator.
pub trait EntropySource: Send + Sync {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RandomSourceUnavailable`] if the source cannot be read.
    fn fill(&self, buf: &mut [u8]) -> Result<(), GeneratorError>;
}
