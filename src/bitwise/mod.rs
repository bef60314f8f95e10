//! Bitwise operation evaluator.
//!
//! Applies a logic operation position-by-position across fixed-width binary
//! operands. There is no carry: every output bit depends only on the input
//! bits at the same position.
//!
//! Evaluation never fails. An operand with no binary digits produces the
//! all-zero result for the requested width.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{BitVector, BitWidth};
use crate::Error;

// ============================================================================
// Operations
// ============================================================================

/// A bitwise operation. `Not` reads only operand A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
    Not,
    Nand,
    Nor,
}

impl BitwiseOp {
    pub const ALL: [BitwiseOp; 6] = [
        BitwiseOp::And, BitwiseOp::Or, BitwiseOp::Xor,
        BitwiseOp::Not, BitwiseOp::Nand, BitwiseOp::Nor,
    ];

    pub fn is_unary(self) -> bool {
        matches!(self, BitwiseOp::Not)
    }

    /// Output bit for one position.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BitwiseOp::And => a && b,
            BitwiseOp::Or => a || b,
            BitwiseOp::Xor => a != b,
            BitwiseOp::Not => !a,
            BitwiseOp::Nand => !(a && b),
            BitwiseOp::Nor => !(a || b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BitwiseOp::And => "AND",
            BitwiseOp::Or => "OR",
            BitwiseOp::Xor => "XOR",
            BitwiseOp::Not => "NOT",
            BitwiseOp::Nand => "NAND",
            BitwiseOp::Nor => "NOR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BitwiseOp::And => "&",
            BitwiseOp::Or => "|",
            BitwiseOp::Xor => "^",
            BitwiseOp::Not => "~",
            BitwiseOp::Nand => "~&",
            BitwiseOp::Nor => "~|",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BitwiseOp::And => "Bitwise AND - Both bits must be 1",
            BitwiseOp::Or => "Bitwise OR - Either bit can be 1",
            BitwiseOp::Xor => "Bitwise XOR - Bits must be different",
            BitwiseOp::Not => "Bitwise NOT - Inverts all bits",
            BitwiseOp::Nand => "Bitwise NAND - NOT AND",
            BitwiseOp::Nor => "Bitwise NOR - NOT OR",
        }
    }

    /// Real-world uses of the operation, for the applications panel.
    pub fn applications(self) -> &'static [&'static str] {
        match self {
            BitwiseOp::And => &[
                "Masking bits: Use to isolate specific bits (e.g., 1101 & 0011 = 0001)",
                "Hardware: Used in multiplication circuits and conditional operations",
            ],
            BitwiseOp::Or => &[
                "Setting bits: Use to turn on specific bits (e.g., 1101 | 0010 = 1111)",
                "Hardware: Used in addition circuits and flag operations",
            ],
            BitwiseOp::Xor => &[
                "Toggling bits: Use to flip specific bits (e.g., 1101 ^ 0011 = 1110)",
                "Hardware: Essential for binary addition and error detection/correction",
            ],
            BitwiseOp::Not => &[
                "Inverting: Use to flip all bits (e.g., ~1101 = 0010 in 4-bit)",
                "Hardware: Used in complement operations and logic circuit inversions",
            ],
            BitwiseOp::Nand => &[
                "Universal gate: Can implement any Boolean function",
                "Hardware: Building block for many complex circuits",
            ],
            BitwiseOp::Nor => &[
                "Universal gate: Alternative to NAND for implementing any function",
                "Hardware: Used in memory cells and flip-flop circuits",
            ],
        }
    }
}

impl fmt::Display for BitwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BitwiseOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitwiseOp::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownName { kind: "bitwise operation", name: s.to_owned() })
    }
}

// ============================================================================
// Results
// ============================================================================

/// Result in the three forms the visualizer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitwiseResult {
    /// Exactly `width` characters.
    pub binary: String,
    pub decimal: u64,
    /// Uppercase, zero-padded to `ceil(width / 4)` digits.
    pub hex: String,
}

impl BitwiseResult {
    /// The fail-soft result: every bit zero.
    pub fn zeroed(width: BitWidth) -> Self {
        Self::from_bits(&BitVector::zeros(width), width)
    }

    fn from_bits(bits: &BitVector, width: BitWidth) -> Self {
        let decimal = bits.to_u64();
        Self {
            binary: bits.to_string(),
            decimal,
            hex: format!("{decimal:0digits$X}", digits = width.hex_digits()),
        }
    }
}

/// Full evaluation, including the normalized operands for the bit-by-bit
/// comparison view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitwiseEvaluation {
    pub op: BitwiseOp,
    pub width: BitWidth,
    pub operand_a: BitVector,
    /// `None` for `NOT`.
    pub operand_b: Option<BitVector>,
    pub bits: BitVector,
    pub result: BitwiseResult,
    /// True when an operand had no binary digits and the zero result was used.
    pub fallback: bool,
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate `a op b` at `width` bits. `b` is ignored for `NOT`.
pub fn evaluate_bitwise(a: &str, b: &str, op: BitwiseOp, width: BitWidth) -> BitwiseResult {
    evaluate_bitwise_detailed(a, b, op, width).result
}

/// Like [`evaluate_bitwise`], keeping the operands and result bits.
pub fn evaluate_bitwise_detailed(a: &str, b: &str, op: BitwiseOp, width: BitWidth) -> BitwiseEvaluation {
    let operand_a = normalize_operand(a, width);
    let operand_b = if op.is_unary() { None } else { Some(normalize_operand(b, width)) };

    let (operand_a, operand_b) = match (operand_a, operand_b) {
        (Some(a), None) => (a, None),
        (Some(a), Some(Some(b))) => (a, Some(b)),
        _ => {
            tracing::warn!(a, b, %op, %width, "operand has no binary digits, using zero result");
            let zeros = BitVector::zeros(width);
            return BitwiseEvaluation {
                op,
                width,
                operand_b: (!op.is_unary()).then(|| zeros.clone()),
                operand_a: zeros.clone(),
                result: BitwiseResult::zeroed(width),
                bits: zeros,
                fallback: true,
            };
        }
    };

    let bits = match &operand_b {
        Some(b) => operand_a.zip_with(b, |x, y| op.apply(x, y)),
        None => operand_a.map(|x| op.apply(x, false)),
    };
    let result = BitwiseResult::from_bits(&bits, width);
    tracing::debug!(%op, %width, binary = %result.binary, "evaluated bitwise operation");

    BitwiseEvaluation { op, width, operand_a, operand_b, bits, result, fallback: false }
}

/// Keep only `0`/`1` characters, then fit to `width` keeping the
/// least-significant bits. `None` when no binary digit remains.
pub fn normalize_operand(literal: &str, width: BitWidth) -> Option<BitVector> {
    let digits: BitVector = literal
        .chars()
        .filter(|c| matches!(c, '0' | '1'))
        .map(|c| c == '1')
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.fit(width))
}
