//! Lab configuration — the state each tool starts from.
//!
//! Every field has a default, so a config file only lists what it changes:
//!
//! ```json
//! { "tool": "logic", "gates": { "gate": "XOR", "inputs": 3 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bitwise::BitwiseOp;
use crate::gate::{Gate, MULTI_INPUT_ARITY};
use crate::lab::{SimulatorMode, Tool};
use crate::model::{BitWidth, Radix};
use crate::{Error, Result};

/// Initial settings for every tool in the lab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Tool selected on start.
    pub tool: Tool,
    pub converter: ConverterDefaults,
    pub bitwise: BitwiseDefaults,
    pub gates: GateDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterDefaults {
    pub radix: Radix,
    pub width: BitWidth,
    pub signed: bool,
}

impl Default for ConverterDefaults {
    fn default() -> Self {
        Self { radix: Radix::Decimal, width: BitWidth::W8, signed: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitwiseDefaults {
    pub operand_a: String,
    pub operand_b: String,
    pub op: BitwiseOp,
    pub width: BitWidth,
}

impl Default for BitwiseDefaults {
    fn default() -> Self {
        Self {
            operand_a: "1101".into(),
            operand_b: "1010".into(),
            op: BitwiseOp::And,
            width: BitWidth::W8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateDefaults {
    pub gate: Gate,
    /// Input count for multi-input gates (2–4). Ignored by `NOT`.
    pub inputs: usize,
    pub mode: SimulatorMode,
}

impl Default for GateDefaults {
    fn default() -> Self {
        Self { gate: Gate::And, inputs: 2, mode: SimulatorMode::Single }
    }
}

impl LabConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LabConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading lab config");
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !MULTI_INPUT_ARITY.contains(&self.gates.inputs) {
            return Err(Error::ConfigError(format!(
                "gates.inputs must be between {} and {}, got {}",
                MULTI_INPUT_ARITY.start(),
                MULTI_INPUT_ARITY.end(),
                self.gates.inputs,
            )));
        }
        Ok(())
    }
}
