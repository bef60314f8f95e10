//! Base converter — one integer literal rendered in all four radices.
//!
//! ```text
//! literal ──parse(radix)──▶ i128 ──range(width, signed)──▶ Conversion
//!                                                         ├ binary  (two's complement, padded)
//!                                                         ├ decimal (signed)
//!                                                         ├ hex     (signed, uppercase)
//!                                                         └ octal   (signed)
//! ```
//!
//! Only the binary rendering wraps negative values into their
//! two's-complement pattern. Hex and octal render the signed value with a
//! leading minus sign, e.g. `-1` at 8 bits is `11111111` / `-1` / `-1`.

use serde::{Deserialize, Serialize};

use crate::model::{BitVector, BitWidth, Radix};
use crate::{Error, Result};

/// The same value rendered in every radix.
///
/// A blank input produces [`Conversion::empty`]: all strings empty, no bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub binary: String,
    pub decimal: String,
    pub hexadecimal: String,
    pub octal: String,
    /// Raw bit pattern behind `binary`, MSB first.
    pub bits: BitVector,
}

impl Conversion {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.decimal.is_empty()
    }

    /// Rendering for a given radix.
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Decimal => &self.decimal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }
}

/// Convert `literal` (written in `radix`) for a `width`-bit register.
///
/// Fails with [`Error::ParseError`] when the literal contains a character
/// outside the radix's digit set, and with [`Error::RangeError`] when the
/// value does not fit `width` bits under the chosen signedness.
pub fn convert_base(literal: &str, radix: Radix, width: BitWidth, signed: bool) -> Result<Conversion> {
    if literal.trim().is_empty() {
        return Ok(Conversion::empty());
    }

    let result = parse_literal(literal, radix).and_then(|parsed| match parsed {
        Magnitude::Exact(value) if width.contains(value, signed) => Ok(render(value, width)),
        _ => Err(Error::RangeError { width, signed }),
    });

    match &result {
        Ok(c) => tracing::debug!(literal, %radix, %width, signed, decimal = %c.decimal, "converted literal"),
        Err(e) => tracing::debug!(literal, %radix, %width, signed, error = %e, "conversion rejected"),
    }
    result
}

// ============================================================================
// Parsing
// ============================================================================

/// Parsed value, or a marker that it exceeds every supported width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    Exact(i128),
    Overflow,
}

/// Strict parse: optional sign, optional `0x` for hex, then digits only.
fn parse_literal(literal: &str, radix: Radix) -> Result<Magnitude> {
    let invalid = || Error::ParseError { literal: literal.to_owned(), radix };

    let trimmed = literal.trim();
    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let digits = match radix {
        Radix::Hexadecimal => unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned),
        _ => unsigned,
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let base = i128::from(radix.base());
    let mut acc: Option<i128> = Some(0);
    for c in digits.chars() {
        let digit = radix.digit_value(c).ok_or_else(invalid)?;
        // Keep scanning after overflow so bad characters still win.
        acc = acc
            .and_then(|v| v.checked_mul(base))
            .and_then(|v| v.checked_add(i128::from(digit)));
    }

    Ok(match acc {
        Some(v) if negative => Magnitude::Exact(-v),
        Some(v) => Magnitude::Exact(v),
        None => Magnitude::Overflow,
    })
}

// ============================================================================
// Rendering
// ============================================================================

fn render(value: i128, width: BitWidth) -> Conversion {
    let pattern = value.rem_euclid(width.modulus()) as u64;
    let bits = BitVector::from_u64(pattern, width);

    let (sign, magnitude) = if value < 0 { ("-", value.unsigned_abs()) } else { ("", value as u128) };

    Conversion {
        binary: bits.to_string(),
        decimal: value.to_string(),
        hexadecimal: format!("{sign}{magnitude:X}"),
        octal: format!("{sign}{magnitude:o}"),
        bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_literal_is_empty() {
        for blank in ["", "   ", "\t\n"] {
            let c = convert_base(blank, Radix::Decimal, BitWidth::W8, false).unwrap();
            assert!(c.is_empty());
            assert_eq!(c.binary, "");
            assert_eq!(c.hexadecimal, "");
            assert_eq!(c.octal, "");
            assert!(c.bits.is_empty());
        }
    }

    #[test]
    fn test_decimal_to_all() {
        let c = convert_base("202", Radix::Decimal, BitWidth::W8, false).unwrap();
        assert_eq!(c.binary, "11001010");
        assert_eq!(c.decimal, "202");
        assert_eq!(c.hexadecimal, "CA");
        assert_eq!(c.octal, "312");
        assert_eq!(c.bits.len(), 8);
    }

    #[test]
    fn test_hex_input_case_and_prefix() {
        let lower = convert_base("ff", Radix::Hexadecimal, BitWidth::W8, false).unwrap();
        let prefixed = convert_base("0xFF", Radix::Hexadecimal, BitWidth::W8, false).unwrap();
        assert_eq!(lower, prefixed);
        assert_eq!(lower.decimal, "255");
    }

    #[test]
    fn test_negative_signed_asymmetry() {
        let c = convert_base("-6", Radix::Decimal, BitWidth::W8, true).unwrap();
        assert_eq!(c.binary, "11111010");
        assert_eq!(c.decimal, "-6");
        assert_eq!(c.hexadecimal, "-6");
        assert_eq!(c.octal, "-6");
    }

    #[test]
    fn test_signed_minimum() {
        let c = convert_base("-128", Radix::Decimal, BitWidth::W8, true).unwrap();
        assert_eq!(c.binary, "10000000");
        assert_eq!(c.hexadecimal, "-80");
        assert!(matches!(
            convert_base("-129", Radix::Decimal, BitWidth::W8, true),
            Err(Error::RangeError { .. })
        ));
    }

    #[test]
    fn test_negative_rejected_when_unsigned() {
        let err = convert_base("-1", Radix::Decimal, BitWidth::W16, false).unwrap_err();
        assert_eq!(err.to_string(), "Number out of range for 16-bit unsigned integer");
    }

    #[test]
    fn test_invalid_digit() {
        let err = convert_base("102", Radix::Binary, BitWidth::W8, false).unwrap_err();
        assert!(matches!(err, Error::ParseError { radix: Radix::Binary, .. }));

        assert!(convert_base("12abc", Radix::Decimal, BitWidth::W8, false).is_err());
        assert!(convert_base("-", Radix::Decimal, BitWidth::W8, true).is_err());
        assert!(convert_base("0x", Radix::Hexadecimal, BitWidth::W8, false).is_err());
        assert!(convert_base("0x1", Radix::Decimal, BitWidth::W8, false).is_err());
    }

    #[test]
    fn test_64_bit_extremes_are_exact() {
        let max = convert_base("18446744073709551615", Radix::Decimal, BitWidth::W64, false).unwrap();
        assert_eq!(max.binary, "1".repeat(64));
        assert_eq!(max.hexadecimal, "FFFFFFFFFFFFFFFF");

        let min = convert_base("-9223372036854775808", Radix::Decimal, BitWidth::W64, true).unwrap();
        assert_eq!(min.binary, format!("1{}", "0".repeat(63)));
        assert_eq!(min.octal, "-1000000000000000000000");
    }

    #[test]
    fn test_huge_literal_is_range_error() {
        let huge = "9".repeat(60);
        assert!(matches!(
            convert_base(&huge, Radix::Decimal, BitWidth::W64, false),
            Err(Error::RangeError { .. })
        ));
        // A bad digit still reports a parse error even past overflow.
        let bad = format!("{huge}z");
        assert!(matches!(
            convert_base(&bad, Radix::Decimal, BitWidth::W64, false),
            Err(Error::ParseError { .. })
        ));
    }
}
