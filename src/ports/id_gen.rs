//! ID generator port for producing random identifiers.

use crate::error::GeneratorError;
use crate::generator::IdentifierKind;

/// Generates identifiers of a requested kind.
///
/// Commands depend on this trait rather than on [`crate::generator::Generator`]
/// so generated values can be recorded and replayed.
pub trait IdGenerator: Send + Sync {
    /// Generates one identifier of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RandomSourceUnavailable`] if no secure randomness is available.
    fn generate(&self, kind: IdentifierKind) -> Result<String, GeneratorError>;
}
