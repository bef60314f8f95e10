//! # logic-lab — Number Systems & Digital Logic Lab
//!
//! The computational core of an interactive teaching lab for computer
//! organization courses. Three independent tools, each a pure function of
//! its inputs:
//!
//! 1. **Base converter**: decimal / binary / hexadecimal / octal under a
//!    chosen bit width and signedness, with range validation
//! 2. **Bitwise evaluator**: AND, OR, XOR, NOT, NAND, NOR applied bit-by-bit
//!    to fixed-width binary operands
//! 3. **Logic gates**: AND, OR, NOT, NAND, NOR, XOR, XNOR over 1–4 inputs,
//!    plus exhaustive truth tables
//!
//! Rendering is left to the caller. The [`lab`] module holds immutable
//! per-tool snapshots a UI can own and replace on every input change.
//!
//! ## Quick Start
//!
//! ```rust
//! use logic_lab::{convert_base, evaluate_bitwise, truth_table};
//! use logic_lab::{BitWidth, BitwiseOp, Gate, Radix};
//!
//! # fn example() -> logic_lab::Result<()> {
//! let c = convert_base("-1", Radix::Decimal, BitWidth::W8, true)?;
//! assert_eq!(c.binary, "11111111");
//! assert_eq!(c.hexadecimal, "-1");
//!
//! let r = evaluate_bitwise("1101", "1010", BitwiseOp::And, BitWidth::W4);
//! assert_eq!(r.binary, "1000");
//!
//! let table = truth_table(Gate::Xor, 2)?;
//! assert_eq!(table.high_count(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod convert;
pub mod bitwise;
pub mod gate;
pub mod format;
pub mod lab;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{BitVector, BitWidth, Radix};

// ============================================================================
// Re-exports: Evaluators
// ============================================================================

pub use convert::{convert_base, Conversion};
pub use bitwise::{evaluate_bitwise, evaluate_bitwise_detailed, BitwiseEvaluation, BitwiseOp, BitwiseResult};
pub use gate::{evaluate_gate, truth_table, Gate, TruthRow, TruthTable};

// ============================================================================
// Re-exports: State container + config
// ============================================================================

pub use lab::{BitwiseState, ConverterState, ConverterView, GateState, Lab, SimulatorMode, Tool};
pub use config::LabConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid number: '{literal}' is not a valid {radix} literal")]
    ParseError { literal: String, radix: Radix },

    #[error("Number out of range for {width}-bit {} integer", signedness(.signed))]
    RangeError { width: BitWidth, signed: bool },

    #[error("Invalid arity for {gate} gate: got {arity}, expected {}", arity_hint(.gate))]
    InvalidArity { gate: Gate, arity: usize },

    #[error("Unknown {kind}: '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn signedness(signed: &bool) -> &'static str {
    if *signed { "signed" } else { "unsigned" }
}

fn arity_hint(gate: &Gate) -> &'static str {
    if gate.is_unary() { "exactly 1" } else { "2 to 4" }
}

/// Errors surfaced by the base converter. Only `ParseError` and
/// `RangeError` are ever produced by [`convert_base`].
pub type ConversionError = Error;

pub type Result<T> = std::result::Result<T, Error>;
