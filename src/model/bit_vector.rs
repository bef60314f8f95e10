//! BitVector — fixed-length, MSB-first sequence of bits.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::BitWidth;

/// Ordered bits, most-significant first. Up to 64 bits live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVector {
    bits: SmallVec<[bool; 64]>,
}

impl BitVector {
    /// An empty vector (what the converter exposes for a blank literal).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn zeros(width: BitWidth) -> Self {
        Self { bits: SmallVec::from_elem(false, width.bits() as usize) }
    }

    /// Low `width` bits of `value`, MSB first.
    pub fn from_u64(value: u64, width: BitWidth) -> Self {
        let n = width.bits();
        Self {
            bits: (0..n).rev().map(|j| (value >> j) & 1 == 1).collect(),
        }
    }

    /// Bits from an MSB-first slice, without resizing.
    pub fn from_bools(bits: &[bool]) -> Self {
        Self { bits: SmallVec::from_slice(bits) }
    }

    /// Left-pad with zeros or drop leading bits so exactly `width`
    /// least-significant bits remain.
    pub fn fit(&self, width: BitWidth) -> Self {
        let n = width.bits() as usize;
        let len = self.bits.len();
        let bits = if len >= n {
            SmallVec::from_slice(&self.bits[len - n..])
        } else {
            std::iter::repeat_n(false, n - len)
                .chain(self.bits.iter().copied())
                .collect()
        };
        Self { bits }
    }

    pub fn len(&self) -> usize { self.bits.len() }
    pub fn is_empty(&self) -> bool { self.bits.is_empty() }

    /// Bit at `index`, counted from the most-significant end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Unsigned value of the bits. Vectors longer than 64 bits keep the
    /// low 64.
    pub fn to_u64(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &b| (acc << 1) | u64::from(b))
    }

    /// Apply `f` to every bit.
    pub fn map(&self, f: impl Fn(bool) -> bool) -> Self {
        Self { bits: self.bits.iter().map(|&b| f(b)).collect() }
    }

    /// Combine position-wise with another vector of the same length.
    pub fn zip_with(&self, other: &BitVector, f: impl Fn(bool, bool) -> bool) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            bits: self.bits.iter().zip(other.bits.iter()).map(|(&a, &b)| f(a, b)).collect(),
        }
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

/// Renders as a string of `0`/`1` characters.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64() {
        let v = BitVector::from_u64(5, BitWidth::W4);
        assert_eq!(v.to_string(), "0101");
        assert_eq!(v.to_u64(), 5);
        assert_eq!(v.get(1), Some(true));
        assert_eq!(v.get(4), None);
    }

    #[test]
    fn test_from_u64_truncates() {
        let v = BitVector::from_u64(0x1F3, BitWidth::W8);
        assert_eq!(v.to_string(), "11110011");
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        let short = BitVector::from_bools(&[true, false]);
        assert_eq!(short.fit(BitWidth::W4).to_string(), "0010");

        let long = BitVector::from_bools(&[true, true, false, false, true, false]);
        assert_eq!(long.fit(BitWidth::W4).to_string(), "0010");
    }

    #[test]
    fn test_zeros_and_full_width() {
        assert_eq!(BitVector::zeros(BitWidth::W8).to_string(), "00000000");
        let all = BitVector::from_u64(u64::MAX, BitWidth::W64);
        assert_eq!(all.count_ones(), 64);
        assert_eq!(all.to_u64(), u64::MAX);
    }
}
