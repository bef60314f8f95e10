//! Logic gate evaluator.
//!
//! Seven gates over 1–4 Boolean inputs. `NOT` always takes exactly one
//! input; every other gate takes 2, 3 or 4, chosen by the caller.
//!
//! For more than two inputs `XOR` is odd parity and `XNOR` even parity.

pub mod truth_table;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use truth_table::{truth_table, TruthRow, TruthTable};

/// Input counts accepted by every gate except `NOT`.
pub const MULTI_INPUT_ARITY: RangeInclusive<usize> = 2..=4;

/// A logic gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gate {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl Gate {
    pub const ALL: [Gate; 7] = [
        Gate::And, Gate::Or, Gate::Not, Gate::Nand,
        Gate::Nor, Gate::Xor, Gate::Xnor,
    ];

    pub fn is_unary(self) -> bool {
        matches!(self, Gate::Not)
    }

    pub fn accepts_arity(self, arity: usize) -> bool {
        if self.is_unary() { arity == 1 } else { MULTI_INPUT_ARITY.contains(&arity) }
    }

    /// Input count the simulator uses for a requested count: 1 for `NOT`,
    /// otherwise the request clamped to 2..=4.
    pub fn effective_arity(self, requested: usize) -> usize {
        if self.is_unary() {
            1
        } else {
            requested.clamp(*MULTI_INPUT_ARITY.start(), *MULTI_INPUT_ARITY.end())
        }
    }

    /// Output for `inputs`. The caller guarantees the arity.
    fn apply(self, inputs: &[bool]) -> bool {
        let highs = inputs.iter().filter(|&&x| x).count();
        match self {
            Gate::And => highs == inputs.len(),
            Gate::Or => highs > 0,
            Gate::Not => !inputs[0],
            Gate::Nand => highs != inputs.len(),
            Gate::Nor => highs == 0,
            Gate::Xor => highs % 2 == 1,
            Gate::Xnor => highs % 2 == 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Not => "NOT",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
        }
    }

    /// Boolean-algebra symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::And => "·",
            Gate::Or => "+",
            Gate::Not => "¬",
            Gate::Nand => "↑",
            Gate::Nor => "↓",
            Gate::Xor => "⊕",
            Gate::Xnor => "⊙",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Gate::And => "Output is 1 only when ALL inputs are 1",
            Gate::Or => "Output is 1 when ANY input is 1",
            Gate::Not => "Output is opposite of input",
            Gate::Nand => "NOT AND - opposite of AND gate",
            Gate::Nor => "NOT OR - opposite of OR gate",
            Gate::Xor => "Exclusive OR - output is 1 when inputs are different",
            Gate::Xnor => "Exclusive NOR - output is 1 when inputs are same",
        }
    }

    /// Whether the gate symbol carries an inversion bubble.
    pub fn is_inverted(self) -> bool {
        matches!(self, Gate::Nand | Gate::Nor | Gate::Xnor)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownName { kind: "gate", name: s.to_owned() })
    }
}

/// Evaluate `gate` over `inputs`.
///
/// Fails with [`Error::InvalidArity`] when the input count does not suit
/// the gate (`NOT` needs exactly one, the rest 2–4).
pub fn evaluate_gate(gate: Gate, inputs: &[bool]) -> Result<bool> {
    if !gate.accepts_arity(inputs.len()) {
        return Err(Error::InvalidArity { gate, arity: inputs.len() });
    }
    Ok(gate.apply(inputs))
}
