//! Validated identicon hash.

use std::fmt;
use std::str::FromStr;

use crate::error::HashFormatError;

/// Minimum number of hex digits a hash must have.
pub const MIN_HASH_LEN: usize = 11;

/// Number of trailing hex digits that make up the hue.
const HUE_DIGITS: usize = 7;

/// Largest value representable by [`HUE_DIGITS`] hex digits.
const HUE_MAX: u32 = 0x0fff_ffff;

/// A hex hash string accepted by the generator.
///
/// Parsing is case-insensitive; the digits are stored lowercased so that
/// `"A1B2…"` and `"a1b2…"` are the same hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdenticonHash(String);

impl IdenticonHash {
    /// Validates `hash`.
    ///
    /// Fails with [`HashFormatError::NotHex`] if any character is not a hex
    /// digit (this includes the empty string) and with
    /// [`HashFormatError::TooShort`] if it has fewer than [`MIN_HASH_LEN`]
    /// digits.
    pub fn parse(hash: &str) -> Result<Self, HashFormatError> {
        if hash.is_empty() || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HashFormatError::NotHex);
        }
        if hash.len() < MIN_HASH_LEN {
            return Err(HashFormatError::TooShort {
                len: hash.len(),
                min: MIN_HASH_LEN,
            });
        }
        Ok(Self(hash.to_ascii_lowercase()))
    }

    /// Returns the lowercased hash.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of hex digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a valid hash has at least [`MIN_HASH_LEN`] digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value of the hex digit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Every index below
    /// [`MIN_HASH_LEN`] is valid.
    pub fn nibble(&self, index: usize) -> u32 {
        hex_value(self.0.as_bytes()[index])
    }

    /// Returns the hue encoded by the last seven digits, in `[0, 1]`.
    pub fn hue(&self) -> f32 {
        let digits = &self.0[self.0.len() - HUE_DIGITS..];
        let value = digits
            .bytes()
            .fold(0u32, |acc, b| (acc << 4) | hex_value(b));
        value as f32 / HUE_MAX as f32
    }
}

fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'f' => u32::from(b - b'a') + 10,
        _ => 0,
    }
}

impl FromStr for IdenticonHash {
    type Err = HashFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IdenticonHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdenticonHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
