//! Live entropy source backed by the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::GeneratorError;
use crate::ports::EntropySource;

/// Reads random bytes from the operating system via [`OsRng`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| GeneratorError::RandomSourceUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        let mut a = [0_u8; 32];
        let mut b = [0_u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_buffer_is_ok() {
        assert!(OsEntropy.fill(&mut []).is_ok());
    }
}
