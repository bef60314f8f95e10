//! End-to-end tests for the base converter.
//!
//! Each test goes through the public `convert_base` entry point and checks
//! all four renderings together.

use logic_lab::{convert_base, BitWidth, Error, Radix};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// 1. Zero renders identically at every unsigned width
// ============================================================================

#[test]
fn test_zero_at_every_width() {
    for width in BitWidth::ALL {
        let c = convert_base("0", Radix::Decimal, width, false).unwrap();
        assert_eq!(c.binary, "0".repeat(width.bits() as usize));
        assert_eq!(c.decimal, "0");
        assert_eq!(c.hexadecimal, "0");
        assert_eq!(c.octal, "0");
    }
}

// ============================================================================
// 2. Two's complement of -1
// ============================================================================

#[test]
fn test_minus_one_signed_8_bit() {
    let c = convert_base("-1", Radix::Decimal, BitWidth::W8, true).unwrap();
    assert_eq!(c.binary, "11111111");
    assert_eq!(c.decimal, "-1");
    assert_eq!(c.hexadecimal, "-1");
    assert_eq!(c.octal, "-1");
    assert_eq!(c.bits.count_ones(), 8);
}

// ============================================================================
// 3. Range errors name width and signedness
// ============================================================================

#[test]
fn test_256_out_of_range_8_bit_unsigned() {
    let err = convert_base("256", Radix::Decimal, BitWidth::W8, false).unwrap_err();
    assert!(matches!(err, Error::RangeError { width: BitWidth::W8, signed: false }));
    assert_eq!(err.to_string(), "Number out of range for 8-bit unsigned integer");
}

#[test]
fn test_128_out_of_range_8_bit_signed() {
    let err = convert_base("10000000", Radix::Binary, BitWidth::W8, true).unwrap_err();
    assert_eq!(err.to_string(), "Number out of range for 8-bit signed integer");
}

// ============================================================================
// 4. Every source radix reaches the same value
// ============================================================================

#[test]
fn test_same_value_from_every_radix() {
    let inputs = [
        ("11111111", Radix::Binary),
        ("377", Radix::Octal),
        ("255", Radix::Decimal),
        ("FF", Radix::Hexadecimal),
    ];
    let expected = convert_base("255", Radix::Decimal, BitWidth::W16, false).unwrap();
    for (literal, radix) in inputs {
        let c = convert_base(literal, radix, BitWidth::W16, false).unwrap();
        assert_eq!(c, expected, "{literal} in {radix}");
    }
    assert_eq!(expected.get(Radix::Binary), "0000000011111111");
    assert_eq!(expected.get(Radix::Octal), "377");
}

// ============================================================================
// 5. Parse errors
// ============================================================================

#[test]
fn test_parse_errors_per_radix() {
    let bad = [
        ("2", Radix::Binary),
        ("8", Radix::Octal),
        ("1.5", Radix::Decimal),
        ("G", Radix::Hexadecimal),
        ("1 0", Radix::Decimal),
        ("--1", Radix::Decimal),
    ];
    for (literal, radix) in bad {
        let err = convert_base(literal, radix, BitWidth::W32, true).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }), "{literal} in {radix}: {err}");
    }
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let c = convert_base("  42 ", Radix::Decimal, BitWidth::W8, false).unwrap();
    assert_eq!(c.decimal, "42");
    assert_eq!(c.hexadecimal, "2A");
}

// ============================================================================
// 6. Properties
// ============================================================================

fn render(value: i128, radix: Radix) -> String {
    let (sign, m) = if value < 0 { ("-", value.unsigned_abs()) } else { ("", value as u128) };
    match radix {
        Radix::Binary => format!("{sign}{m:b}"),
        Radix::Octal => format!("{sign}{m:o}"),
        Radix::Decimal => format!("{sign}{m}"),
        Radix::Hexadecimal => format!("{sign}{m:x}"),
    }
}

fn width_strategy() -> impl Strategy<Value = BitWidth> {
    prop::sample::select(BitWidth::ALL.to_vec())
}

fn radix_strategy() -> impl Strategy<Value = Radix> {
    prop::sample::select(Radix::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_decimal_round_trips(
        width in width_strategy(),
        signed in any::<bool>(),
        radix in radix_strategy(),
        seed in any::<u64>(),
    ) {
        let min = width.min_value(signed);
        let span = (width.max_value(signed) - min + 1) as u128;
        let value = min + (u128::from(seed) % span) as i128;

        let c = convert_base(&render(value, radix), radix, width, signed).unwrap();
        prop_assert_eq!(c.decimal.parse::<i128>().unwrap(), value);
        prop_assert_eq!(c.binary.len(), width.bits() as usize);
        prop_assert_eq!(c.bits.len(), width.bits() as usize);
        prop_assert_eq!(
            i128::from(c.bits.to_u64()),
            value.rem_euclid(width.modulus())
        );
    }

    #[test]
    fn prop_values_above_max_are_rejected(
        width in prop::sample::select(vec![BitWidth::W4, BitWidth::W8, BitWidth::W16, BitWidth::W32]),
        signed in any::<bool>(),
        excess in 1u32..1000,
    ) {
        let value = width.max_value(signed) + i128::from(excess);
        let result = convert_base(&value.to_string(), Radix::Decimal, width, signed);
        let is_range_error = matches!(result, Err(Error::RangeError { .. }));
        prop_assert!(is_range_error);
    }
}
