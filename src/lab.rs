//! Lab state container.
//!
//! Each tool's state is an immutable snapshot. Updates return a new
//! snapshot and evaluation is a pure function of it, so a front end can
//! keep the current `Lab`, replace it on every input event and re-render
//! from `evaluate()`.
//!
//! ```text
//! event ──▶ lab.with_converter(lab.converter.with_literal("42")) ──▶ new Lab
//!                                                                  │
//!                                    render ◀── converter.evaluate()
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bitwise::{evaluate_bitwise_detailed, BitwiseEvaluation, BitwiseOp};
use crate::config::LabConfig;
use crate::convert::{convert_base, Conversion};
use crate::gate::{evaluate_gate, truth_table, Gate, TruthTable, MULTI_INPUT_ARITY};
use crate::model::{BitWidth, Radix};
use crate::Result;

// ============================================================================
// Tool selection
// ============================================================================

/// The tools offered by the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Converter,
    Logic,
    Operations,
    /// Circuit builder. Announced but not implemented.
    Circuit,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Converter, Tool::Logic, Tool::Operations, Tool::Circuit];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Converter => "Number Converter",
            Tool::Logic => "Logic Gate Simulator",
            Tool::Operations => "Binary Logic Operations",
            Tool::Circuit => "Circuit Builder",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::Converter => "Convert between number systems",
            Tool::Logic => "Simulate individual logic gates",
            Tool::Operations => "Bitwise operations visualizer",
            Tool::Circuit => "Coming soon - Advanced circuit design",
        }
    }

    pub fn is_available(self) -> bool {
        !matches!(self, Tool::Circuit)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gate simulator view: one gate with live inputs, or its truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulatorMode {
    #[default]
    Single,
    TruthTable,
}

// ============================================================================
// Converter snapshot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterState {
    pub literal: String,
    pub radix: Radix,
    pub width: BitWidth,
    pub signed: bool,
}

/// What the converter screen shows: the conversion, or an empty one plus
/// the error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterView {
    pub conversion: Conversion,
    pub error: Option<String>,
}

impl ConverterState {
    pub fn new(radix: Radix, width: BitWidth, signed: bool) -> Self {
        Self { literal: String::new(), radix, width, signed }
    }

    pub fn with_literal(&self, literal: impl Into<String>) -> Self {
        Self { literal: literal.into(), ..self.clone() }
    }

    pub fn with_radix(&self, radix: Radix) -> Self {
        Self { radix, ..self.clone() }
    }

    pub fn with_width(&self, width: BitWidth) -> Self {
        Self { width, ..self.clone() }
    }

    pub fn with_signed(&self, signed: bool) -> Self {
        Self { signed, ..self.clone() }
    }

    pub fn convert(&self) -> Result<Conversion> {
        convert_base(&self.literal, self.radix, self.width, self.signed)
    }

    pub fn evaluate(&self) -> ConverterView {
        match self.convert() {
            Ok(conversion) => ConverterView { conversion, error: None },
            Err(e) => ConverterView { conversion: Conversion::empty(), error: Some(e.to_string()) },
        }
    }
}

// ============================================================================
// Bitwise snapshot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitwiseState {
    pub operand_a: String,
    pub operand_b: String,
    pub op: BitwiseOp,
    pub width: BitWidth,
}

impl BitwiseState {
    pub fn with_operand_a(&self, a: impl Into<String>) -> Self {
        Self { operand_a: a.into(), ..self.clone() }
    }

    pub fn with_operand_b(&self, b: impl Into<String>) -> Self {
        Self { operand_b: b.into(), ..self.clone() }
    }

    pub fn with_op(&self, op: BitwiseOp) -> Self {
        Self { op, ..self.clone() }
    }

    pub fn with_width(&self, width: BitWidth) -> Self {
        Self { width, ..self.clone() }
    }

    pub fn evaluate(&self) -> BitwiseEvaluation {
        evaluate_bitwise_detailed(&self.operand_a, &self.operand_b, self.op, self.width)
    }
}

// ============================================================================
// Gate simulator snapshot
// ============================================================================

/// Gate simulator state.
///
/// `inputs` always has exactly `gate.effective_arity(input_count)` entries;
/// changing the gate or the input count resets every input to LOW.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateState {
    gate: Gate,
    input_count: usize,
    inputs: SmallVec<[bool; 4]>,
    mode: SimulatorMode,
}

impl GateState {
    pub fn new(gate: Gate, input_count: usize, mode: SimulatorMode) -> Self {
        let input_count = input_count.clamp(*MULTI_INPUT_ARITY.start(), *MULTI_INPUT_ARITY.end());
        Self {
            gate,
            input_count,
            inputs: SmallVec::from_elem(false, gate.effective_arity(input_count)),
            mode,
        }
    }

    pub fn gate(&self) -> Gate { self.gate }
    pub fn mode(&self) -> SimulatorMode { self.mode }
    pub fn inputs(&self) -> &[bool] { &self.inputs }

    /// Inputs actually wired to the gate.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Requested input count for multi-input gates, kept while `NOT` is
    /// selected.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn with_gate(&self, gate: Gate) -> Self {
        Self::new(gate, self.input_count, self.mode)
    }

    pub fn with_input_count(&self, count: usize) -> Self {
        Self::new(self.gate, count, self.mode)
    }

    pub fn with_mode(&self, mode: SimulatorMode) -> Self {
        Self { mode, ..self.clone() }
    }

    /// Set one input. Indices past the gate's arity leave the state as is.
    pub fn with_input(&self, index: usize, value: bool) -> Self {
        let mut next = self.clone();
        match next.inputs.get_mut(index) {
            Some(slot) => *slot = value,
            None => tracing::warn!(index, arity = self.arity(), gate = %self.gate, "ignoring input past gate arity"),
        }
        next
    }

    pub fn toggle_input(&self, index: usize) -> Self {
        match self.inputs.get(index) {
            Some(&current) => self.with_input(index, !current),
            None => self.with_input(index, true),
        }
    }

    pub fn output(&self) -> Result<bool> {
        evaluate_gate(self.gate, &self.inputs)
    }

    pub fn truth_table(&self) -> Result<TruthTable> {
        truth_table(self.gate, self.arity())
    }
}

// ============================================================================
// Lab
// ============================================================================

/// Snapshot of the whole lab: the selected tool and every tool's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub tool: Tool,
    pub converter: ConverterState,
    pub bitwise: BitwiseState,
    pub gates: GateState,
}

impl Default for Lab {
    fn default() -> Self {
        Self::from_config(&LabConfig::default())
    }
}

impl Lab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LabConfig) -> Self {
        let c = &config.converter;
        let b = &config.bitwise;
        let g = &config.gates;
        Self {
            tool: config.tool,
            converter: ConverterState::new(c.radix, c.width, c.signed),
            bitwise: BitwiseState {
                operand_a: b.operand_a.clone(),
                operand_b: b.operand_b.clone(),
                op: b.op,
                width: b.width,
            },
            gates: GateState::new(g.gate, g.inputs, g.mode),
        }
    }

    pub fn with_tool(&self, tool: Tool) -> Self {
        Self { tool, ..self.clone() }
    }

    pub fn with_converter(&self, converter: ConverterState) -> Self {
        Self { converter, ..self.clone() }
    }

    pub fn with_bitwise(&self, bitwise: BitwiseState) -> Self {
        Self { bitwise, ..self.clone() }
    }

    pub fn with_gates(&self, gates: GateState) -> Self {
        Self { gates, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_error_view() {
        let state = ConverterState::new(Radix::Decimal, BitWidth::W8, false).with_literal("256");
        let view = state.evaluate();
        assert!(view.conversion.is_empty());
        assert_eq!(view.error.as_deref(), Some("Number out of range for 8-bit unsigned integer"));

        let view = state.with_width(BitWidth::W16).evaluate();
        assert_eq!(view.error, None);
        assert_eq!(view.conversion.binary, "0000000100000000");
    }

    #[test]
    fn test_updates_leave_original_untouched() {
        let before = ConverterState::new(Radix::Decimal, BitWidth::W8, false);
        let after = before.with_literal("5").with_signed(true);
        assert_eq!(before.literal, "");
        assert!(!before.signed);
        assert_eq!(after.literal, "5");
    }

    #[test]
    fn test_gate_reset_on_change() {
        let state = GateState::new(Gate::And, 3, SimulatorMode::Single).toggle_input(0).toggle_input(2);
        assert_eq!(state.inputs(), &[true, false, true]);

        let not = state.with_gate(Gate::Not);
        assert_eq!(not.inputs(), &[false]);
        assert_eq!(not.input_count(), 3);
        assert!(not.output().unwrap());

        let back = not.with_gate(Gate::Or);
        assert_eq!(back.arity(), 3);
        assert_eq!(back.inputs(), &[false, false, false]);
    }

    #[test]
    fn test_gate_input_count_clamped() {
        let state = GateState::new(Gate::Xor, 9, SimulatorMode::TruthTable);
        assert_eq!(state.arity(), 4);
        assert_eq!(state.truth_table().unwrap().len(), 16);
        assert_eq!(state.with_input_count(0).arity(), 2);
    }

    #[test]
    fn test_out_of_range_input_ignored() {
        let state = GateState::new(Gate::Nand, 2, SimulatorMode::Single);
        assert_eq!(state.with_input(5, true), state);
    }

    #[test]
    fn test_default_lab() {
        let lab = Lab::new();
        assert_eq!(lab.tool, Tool::Converter);
        assert_eq!(lab.bitwise.evaluate().result.binary, "00001000");
        assert!(!lab.gates.output().unwrap());
        assert!(!lab.with_tool(Tool::Circuit).tool.is_available());
    }
}
