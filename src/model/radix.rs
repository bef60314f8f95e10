//! Radix — the four numeral systems the lab converts between.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A supported numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// Every radix, in the order the converter renders them.
    pub const ALL: [Radix; 4] = [Radix::Binary, Radix::Decimal, Radix::Hexadecimal, Radix::Octal];

    /// Numeric base (2, 8, 10, 16).
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn from_base(base: u32) -> Option<Radix> {
        match base {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// Value of `c` as a digit of this radix. Hex digits are case-insensitive.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.base())
    }

    pub fn is_digit(self, c: char) -> bool {
        self.digit_value(c).is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    /// Label used by the converter's selectors, e.g. `Binary (Base 2)`.
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        let title: String = chars
            .next()
            .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
            .unwrap_or_default();
        format!("{title} (Base {})", self.base())
    }

    /// Short educational note shown beside each radix.
    pub fn note(self) -> &'static str {
        match self {
            Radix::Binary => "Binary uses only 0s and 1s (base 2)",
            Radix::Decimal => "Decimal is our everyday number system (base 10)",
            Radix::Hexadecimal => "Hexadecimal uses 0-9 and A-F (base 16) - common in memory addresses",
            Radix::Octal => "Octal uses 0-7 (base 8) - sometimes used in file permissions",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts names (`"hex"`, `"Hexadecimal"`) or bases (`"16"`).
impl FromStr for Radix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Radix::Binary),
            "octal" | "oct" | "8" => Ok(Radix::Octal),
            "decimal" | "dec" | "10" => Ok(Radix::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(Radix::Hexadecimal),
            _ => Err(Error::UnknownName { kind: "radix", name: s.to_owned() }),
        }
    }
}
