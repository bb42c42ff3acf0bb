//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// An error raised when parsing a [`BoardSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal characters, got {length}")]
    InvalidLength {
        /// The length of the rejected text.
        length: usize,
    },
    /// The text contains a character that is not a hexadecimal digit.
    #[display("seed contains a non-hexadecimal character at offset {offset}")]
    InvalidDigit {
        /// The byte offset of the offending character.
        offset: usize,
    },
}

/// A 32-byte seed that fully determines a generation run.
///
/// The seed feeds the run's pseudo-random source, which drives both the
/// solver's candidate shuffling and the ordering of symmetry groups during
/// clue removal. Two runs from the same seed produce identical boards.
///
/// Seeds display as (and parse from) 64 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use quadrille_generator::BoardSeed;
///
/// let seed: BoardSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// # Ok::<(), quadrille_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from the system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Instantiates the pseudo-random source for a generation run.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(ParseSeedError::InvalidLength { length: raw.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_value(raw[2 * i]).ok_or(ParseSeedError::InvalidDigit { offset: 2 * i })?;
            let lo = hex_value(raw[2 * i + 1])
                .ok_or(ParseSeedError::InvalidDigit { offset: 2 * i + 1 })?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|digit| digit as u8)
}
