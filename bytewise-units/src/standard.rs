//! Measurement standards
//!
//! Data units follow one of two prefix systems defined by the SI Brochure
//! and IEC 80000-13: decimal SI prefixes (kilo = 1000) and binary IEC
//! prefixes (kibi = 1024).

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::UnitError;

/// The prefix system a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStandard {
    /// Decimal prefixes, base 10
    #[serde(rename = "SI")]
    Si,
    /// Binary prefixes, base 2
    #[serde(rename = "IEC")]
    Iec,
}

impl UnitStandard {
    /// Both standards, in registry order
    pub const ALL: [UnitStandard; 2] = [UnitStandard::Si, UnitStandard::Iec];

    /// Numeric base of the prefix system
    pub fn base(&self) -> u32 {
        match self {
            UnitStandard::Si => 10,
            UnitStandard::Iec => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnitStandard::Si => "SI",
            UnitStandard::Iec => "IEC",
        }
    }
}

impl fmt::Display for UnitStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnitStandard {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SI" => Ok(UnitStandard::Si),
            "IEC" => Ok(UnitStandard::Iec),
            _ => Err(UnitError::StandardNotSupported(s.to_string())),
        }
    }
}
