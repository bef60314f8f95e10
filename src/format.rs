//! Display helpers — the strings a front end puts on screen.
//!
//! Everything here is derived from evaluator results; nothing feeds back
//! into evaluation.

use crate::model::BitWidth;

/// Shown in place of an empty result.
pub const PLACEHOLDER: &str = "—";

/// Split a binary string into groups of four from the left, separated by
/// spaces: `"11001010"` → `"1100 1010"`.
pub fn group_nibbles(binary: &str) -> String {
    let chars: Vec<char> = binary.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grouped binary, or the placeholder when empty.
pub fn binary_display(binary: &str) -> String {
    if binary.is_empty() { PLACEHOLDER.to_owned() } else { group_nibbles(binary) }
}

pub fn decimal_display(decimal: &str) -> String {
    if decimal.is_empty() { PLACEHOLDER.to_owned() } else { decimal.to_owned() }
}

/// `0x`-prefixed hex, or the placeholder. The prefix goes in front of any
/// minus sign, matching the converter screen (`0x-1`).
pub fn hex_display(hex: &str) -> String {
    if hex.is_empty() { PLACEHOLDER.to_owned() } else { format!("0x{hex}") }
}

/// `0`-prefixed octal, or the placeholder.
pub fn octal_display(octal: &str) -> String {
    if octal.is_empty() { PLACEHOLDER.to_owned() } else { format!("0{octal}") }
}

/// Bit position labels, most-significant first: `[7, 6, ..., 0]`.
pub fn bit_positions(width: BitWidth) -> Vec<u32> {
    (0..width.bits()).rev().collect()
}

/// Letter naming the `index`th gate input: A, B, C, D.
pub fn input_label(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

pub fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

/// Logic level name for an input or output.
pub fn level(bit: bool) -> &'static str {
    if bit { "HIGH" } else { "LOW" }
}

/// Caption under the bit pattern, e.g. `8-bit Signed Representation`.
pub fn representation_caption(width: BitWidth, signed: bool) -> String {
    format!("{width}-bit {} Representation", if signed { "Signed" } else { "Unsigned" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_nibbles() {
        assert_eq!(group_nibbles("11001010"), "1100 1010");
        assert_eq!(group_nibbles("1010"), "1010");
        assert_eq!(group_nibbles("101"), "101");
        assert_eq!(group_nibbles("110010"), "1100 10");
        assert_eq!(group_nibbles(""), "");
    }

    #[test]
    fn test_prefixed_displays() {
        assert_eq!(hex_display("CA"), "0xCA");
        assert_eq!(octal_display("312"), "0312");
        assert_eq!(hex_display(""), PLACEHOLDER);
        assert_eq!(binary_display(""), PLACEHOLDER);
    }

    #[test]
    fn test_labels() {
        assert_eq!(bit_positions(BitWidth::W4), vec![3, 2, 1, 0]);
        assert_eq!(input_label(0), 'A');
        assert_eq!(input_label(3), 'D');
        assert_eq!(level(true), "HIGH");
        assert_eq!(representation_caption(BitWidth::W8, true), "8-bit Signed Representation");
    }
}
