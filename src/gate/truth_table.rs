//! Truth-table enumeration.
//!
//! Rows count up in binary with the first input as the most-significant
//! bit: row `i` sets input `j` to bit `n-1-j` of `i`. The first row is
//! all-false and the last all-true.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Gate;
use crate::{Error, Result};

/// One row: an input combination and the gate's output for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthRow {
    pub inputs: SmallVec<[bool; 4]>,
    pub output: bool,
}

/// Every input combination for a gate at a given arity, in counting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub gate: Gate,
    pub arity: usize,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Rows whose output is 1.
    pub fn high_count(&self) -> usize {
        self.rows.iter().filter(|r| r.output).count()
    }

    /// Rows whose output is 0.
    pub fn low_count(&self) -> usize {
        self.rows.len() - self.high_count()
    }

    /// The output column, top to bottom.
    pub fn outputs(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|r| r.output)
    }
}

/// Enumerate all `2^arity` rows for `gate`.
pub fn truth_table(gate: Gate, arity: usize) -> Result<TruthTable> {
    if !gate.accepts_arity(arity) {
        return Err(Error::InvalidArity { gate, arity });
    }

    let rows = (0..1usize << arity)
        .map(|i| {
            let inputs: SmallVec<[bool; 4]> = (0..arity).rev().map(|j| (i >> j) & 1 == 1).collect();
            let output = gate.apply(&inputs);
            TruthRow { inputs, output }
        })
        .collect();

    tracing::debug!(%gate, arity, "generated truth table");
    Ok(TruthTable { gate, arity, rows })
}
