use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a shuffled layout.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use jigsaw_generator::ShuffleSeed;
///
/// let seed: ShuffleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<ShuffleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`ShuffleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contained a non-hex character.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character offset of the offending character.
        offset: usize,
    },
}

impl FromStr for ShuffleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(offset, ch)| {
            ch.to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { ch, offset })
        });
        for byte in &mut bytes {
            // Length was checked above, so both digits are present.
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                return Err(SeedParseError::InvalidLength { len });
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = ((hi? << 4) | lo?) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<ShuffleSeed>(),
            Err(SeedParseError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        let mut text = "0".repeat(63);
        text.insert(10, 'g');
        assert_eq!(
            text.parse::<ShuffleSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'g', offset: 10 })
        );
    }

    #[test]
    fn parse_accepts_upper_case() {
        let seed: ShuffleSeed = "AB".repeat(32).parse().unwrap();
        assert_eq!(seed.as_bytes(), &[0xab; 32]);
        assert_eq!(seed.to_string(), "ab".repeat(32));
    }

    #[test]
    fn phrase_is_stable() {
        assert_eq!(
            ShuffleSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(
            ShuffleSeed::from_phrase("a"),
            ShuffleSeed::from_phrase("b")
        );
    }

    proptest! {
        #[test]
        fn display_then_parse_is_lossless(bytes in any::<[u8; 32]>()) {
            let seed = ShuffleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<ShuffleSeed>(), Ok(seed));
        }
    }
}
