//! Error types for unit construction, parsing and arithmetic
//!
//! Construction and parse failures are raised immediately and always carry
//! the offending text. Size queries never fail; they report `0` instead.

use thiserror::Error;

use crate::UnitValue;

/// Result alias used across the crate.
pub type UnitResult<T> = Result<T, UnitError>;

/// Error type for unit operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unit symbol not supported: {}", describe_symbol(.0))]
    SymbolNotSupported(String),

    #[error("unit standard not supported: {0}")]
    StandardNotSupported(String),

    #[error("unit could not be parsed: {0}")]
    CouldNotBeParsed(String),

    #[error("operation not supported for data units: {0}")]
    OperationNotSupported(&'static str),

    /// One side of a cross-standard operation had an invalid symbol and was
    /// left out. The surviving operand is returned alongside the error.
    #[error("unit symbol not supported: {dropped}, operation returned {kept} unchanged")]
    OperandDropped {
        kept: Box<UnitValue>,
        dropped: String,
    },

    #[error("unable to combine units with invalid symbols: {left} and {right}")]
    InvalidOperands { left: String, right: String },
}

impl UnitError {
    /// Builds a `SymbolNotSupported` for `symbol`
    pub fn symbol_not_supported(symbol: impl Into<String>) -> Self {
        UnitError::SymbolNotSupported(symbol.into())
    }

    /// The degraded value an operation still produced, if any
    pub fn partial(&self) -> Option<&UnitValue> {
        match self {
            UnitError::OperandDropped { kept, .. } => Some(kept),
            _ => None,
        }
    }

    /// Consume the error, keeping only the degraded value
    pub fn into_partial(self) -> Option<UnitValue> {
        match self {
            UnitError::OperandDropped { kept, .. } => Some(*kept),
            _ => None,
        }
    }
}

fn describe_symbol(symbol: &str) -> &str {
    if symbol.is_empty() {
        "empty symbol"
    } else {
        symbol
    }
}
