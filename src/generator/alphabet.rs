//! Symbol alphabets, character classes and unbiased symbol sampling.

use crate::error::GeneratorError;
use crate::ports::EntropySource;

/// A class of characters an identifier may be required to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `0`–`9`.
    Digit,
    /// `a`–`z`.
    Lowercase,
    /// `A`–`Z`.
    Uppercase,
    /// `a`–`f`.
    HexLetter,
}

impl CharClass {
    /// Returns true when `symbol` belongs to this class.
    #[must_use]
    pub fn contains(self, symbol: u8) -> bool {
        match self {
            Self::Digit => symbol.is_ascii_digit(),
            Self::Lowercase => symbol.is_ascii_lowercase(),
            Self::Uppercase => symbol.is_ascii_uppercase(),
            Self::HexLetter => matches!(symbol, b'a'..=b'f'),
        }
    }
}

/// A fixed symbol table plus the classes every candidate must cover.
#[derive(Debug)]
pub struct Alphabet {
    symbols: &'static [u8],
    required: &'static [CharClass],
}

/// Digits, lowercase then uppercase letters: 62 symbols.
pub const ALPHANUMERIC: Alphabet = Alphabet {
    symbols: b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    required: &[CharClass::Digit, CharClass::Lowercase, CharClass::Uppercase],
};

/// Digits then `a`–`f`: 16 symbols.
pub const HEX: Alphabet = Alphabet {
    symbols: b"0123456789abcdef",
    required: &[CharClass::Digit, CharClass::HexLetter],
};

impl Alphabet {
    /// Number of symbols in the alphabet.
    #[must_use]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols, in index order.
    #[must_use]
    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// Returns true when `candidate` holds at least one symbol of every required class.
    #[must_use]
    pub fn is_covered(&self, candidate: &[u8]) -> bool {
        self.required.iter().all(|class| candidate.iter().any(|&symbol| class.contains(symbol)))
    }

    /// Bytes below this bound map onto the alphabet without bias.
    fn acceptance_limit(&self) -> u16 {
        let size = u16::try_from(self.size()).unwrap_or(u16::MAX);
        256 - 256 % size
    }

    /// Draws one uniformly distributed symbol.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RandomSourceUnavailable`] if the source fails.
    pub(crate) fn sample(&self, bytes: &mut ByteStream<'_>) -> Result<u8, GeneratorError> {
        let limit = self.acceptance_limit();
        loop {
            let byte = bytes.next_byte()?;
            if u16::from(byte) < limit {
                return Ok(self.symbols[usize::from(byte) % self.size()]);
            }
        }
    }

    /// Draws `length` independent symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RandomSourceUnavailable`] if the source fails.
    pub(crate) fn draw(
        &self,
        bytes: &mut ByteStream<'_>,
        length: usize,
    ) -> Result<Vec<u8>, GeneratorError> {
        (0..length).map(|_| self.sample(bytes)).collect()
    }
}

/// Buffered reader over an [`EntropySource`], refilled a chunk at a time.
pub(crate) struct ByteStream<'a> {
    source: &'a dyn EntropySource,
    buf: Vec<u8>,
    pos: usize,
}

impl<'a> ByteStream<'a> {
    pub(crate) fn new(source: &'a dyn EntropySource, chunk: usize) -> Self {
        let chunk = chunk.max(1);
        Self { source, buf: vec![0; chunk], pos: chunk }
    }

    fn next_byte(&mut self) -> Result<u8, GeneratorError> {
        if self.pos == self.buf.len() {
            self.source.fill(&mut self.buf)?;
            self.pos = 0;
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::entropy::OsEntropy;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(ALPHANUMERIC.size(), 62);
        assert_eq!(HEX.size(), 16);
    }

    #[test]
    fn acceptance_limits_are_multiples_of_size() {
        assert_eq!(ALPHANUMERIC.acceptance_limit(), 248);
        assert_eq!(HEX.acceptance_limit(), 256);
    }

    #[test]
    fn alphanumeric_coverage_needs_all_three_classes() {
        assert!(ALPHANUMERIC.is_covered(b"aB3kZ9mQ1x"));
        assert!(!ALPHANUMERIC.is_covered(b"abcdefghij"));
        assert!(!ALPHANUMERIC.is_covered(b"abcDEFGHIJ"));
        assert!(!ALPHANUMERIC.is_covered(b"0123456789"));
    }

    #[test]
    fn hex_coverage_needs_digit_and_letter() {
        assert!(HEX.is_covered(b"1a2b3c4d"));
        assert!(!HEX.is_covered(b"12345678"));
        assert!(!HEX.is_covered(b"abcdefab"));
    }

    #[test]
    fn hex_letter_class_stops_at_f() {
        assert!(CharClass::HexLetter.contains(b'f'));
        assert!(!CharClass::HexLetter.contains(b'g'));
        assert!(!CharClass::HexLetter.contains(b'A'));
    }

    // Chi-square over the raw sampler; df = 61, critical value at p = 1e-6 is 128.52.
    #[test]
    fn alphanumeric_sampler_is_uniform() {
        const DRAWS: usize = 100_000;
        let source = OsEntropy;
        let mut bytes = ByteStream::new(&source, 4096);
        let mut counts = [0_usize; 62];
        for _ in 0..DRAWS {
            let symbol = ALPHANUMERIC.sample(&mut bytes).unwrap();
            let index = ALPHANUMERIC.symbols().iter().position(|&s| s == symbol).unwrap();
            counts[index] += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let expected = DRAWS as f64 / 62.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                #[allow(clippy::cast_precision_loss)]
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 128.52, "chi-square {chi_square:.2} rejects uniformity");
    }
}
