//! Random identifier generation from a secure entropy source.
//!
//! Fixed-length identifiers are drawn symbol by symbol from an [`Alphabet`]
//! and redrawn until every required character class is present. GUIDs are
//! built from 16 random bytes as version-4 UUIDs.

pub mod alphabet;
pub mod kind;

use uuid::{Builder, Uuid};

pub use alphabet::{Alphabet, CharClass};
pub use kind::IdentifierKind;

use crate::adapters::live::entropy::OsEntropy;
use crate::error::GeneratorError;
use crate::ports::{EntropySource, IdGenerator};
use alphabet::ByteStream;

const ALPHANUMERIC_LENGTH: usize = 10;
const HEX_LENGTH: usize = 8;

/// Generates identifiers from a secure [`EntropySource`].
///
/// Holds no state besides the source; one instance may be shared across threads.
pub struct Generator {
    source: Box<dyn EntropySource>,
}

impl Generator {
    /// Creates a generator drawing from the given source.
    #[must_use]
    pub fn new(source: Box<dyn EntropySource>) -> Self {
        Self { source }
    }

    /// Creates a generator backed by the operating system CSPRNG.
    #[must_use]
    pub fn os() -> Self {
        Self::new(Box::new(OsEntropy))
    }

    /// Produces one identifier of the requested kind.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RandomSourceUnavailable`] if the source cannot be read.
    pub fn generate(&self, kind: IdentifierKind) -> Result<String, GeneratorError> {
        match kind {
            IdentifierKind::AlphanumericFixed10 => {
                self.constrained(&alphabet::ALPHANUMERIC, ALPHANUMERIC_LENGTH)
            }
            IdentifierKind::HexToken8 => {
                let digits = self.constrained(&alphabet::HEX, HEX_LENGTH)?;
                Ok(format!("0x{digits}"))
            }
            IdentifierKind::StandardGuid => Ok(self.guid()?.hyphenated().to_string()),
            IdentifierKind::UppercaseGuid => {
                let guid = self.guid()?;
                Ok(guid.hyphenated().encode_upper(&mut Uuid::encode_buffer()).to_string())
            }
        }
    }

    fn constrained(&self, alphabet: &Alphabet, length: usize) -> Result<String, GeneratorError> {
        let mut bytes = ByteStream::new(self.source.as_ref(), length * 2);
        loop {
            let candidate = alphabet.draw(&mut bytes, length)?;
            if alphabet.is_covered(&candidate) {
                return Ok(candidate.into_iter().map(char::from).collect());
            }
        }
    }

    fn guid(&self) -> Result<Uuid, GeneratorError> {
        let mut bytes = [0_u8; 16];
        self.source.fill(&mut bytes)?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::os()
    }
}

impl IdGenerator for Generator {
    fn generate(&self, kind: IdentifierKind) -> Result<String, GeneratorError> {
        Generator::generate(self, kind)
    }
}

/// Produces one identifier using the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`GeneratorError::RandomSourceUnavailable`] if the OS source cannot be read.
pub fn generate(kind: IdentifierKind) -> Result<String, GeneratorError> {
    Generator::os().generate(kind)
}
