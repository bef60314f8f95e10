//! BitWidth — the fixed register sizes a value can be rendered in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Register width in bits.
///
/// Serialized as the plain bit count (`8`, not `"W8"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    W4,
    W8,
    W16,
    W32,
    W64,
}

impl BitWidth {
    pub const ALL: [BitWidth; 5] = [BitWidth::W4, BitWidth::W8, BitWidth::W16, BitWidth::W32, BitWidth::W64];

    pub fn bits(self) -> u32 {
        match self {
            BitWidth::W4 => 4,
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }

    pub fn from_bits(bits: u32) -> Option<BitWidth> {
        match bits {
            4 => Some(BitWidth::W4),
            8 => Some(BitWidth::W8),
            16 => Some(BitWidth::W16),
            32 => Some(BitWidth::W32),
            64 => Some(BitWidth::W64),
            _ => None,
        }
    }

    /// Number of hex digits needed to show every bit: `ceil(bits / 4)`.
    pub fn hex_digits(self) -> usize {
        (self.bits() as usize).div_ceil(4)
    }

    /// `2^bits`, the modulus of two's-complement arithmetic at this width.
    pub fn modulus(self) -> i128 {
        1i128 << self.bits()
    }

    /// Mask selecting the low `bits` bits of a `u64`.
    pub fn mask(self) -> u64 {
        match self {
            BitWidth::W64 => u64::MAX,
            w => (1u64 << w.bits()) - 1,
        }
    }

    /// Smallest representable value.
    pub fn min_value(self, signed: bool) -> i128 {
        if signed { -(1i128 << (self.bits() - 1)) } else { 0 }
    }

    /// Largest representable value.
    pub fn max_value(self, signed: bool) -> i128 {
        if signed {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            self.modulus() - 1
        }
    }

    pub fn contains(self, value: i128, signed: bool) -> bool {
        (self.min_value(signed)..=self.max_value(signed)).contains(&value)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl From<BitWidth> for u32 {
    fn from(w: BitWidth) -> u32 { w.bits() }
}

impl TryFrom<u32> for BitWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        BitWidth::from_bits(bits).ok_or_else(|| Error::UnknownName {
            kind: "bit width",
            name: bits.to_string(),
        })
    }
}

/// Accepts `"8"` or `"8-bit"`.
impl FromStr for BitWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("-bit")
            .or_else(|| trimmed.strip_suffix("bit"))
            .unwrap_or(trimmed)
            .trim();
        digits
            .parse::<u32>()
            .ok()
            .and_then(BitWidth::from_bits)
            .ok_or_else(|| Error::UnknownName { kind: "bit width", name: s.to_owned() })
    }
}
