//! Arithmetic on unit values
//!
//! Same-standard `add`/`subtract` renormalize the result: the exponent is the
//! largest of the two operand exponents and a magnitude-derived candidate,
//! and the byte-flavored symbol is preferred unless its magnitude would drop
//! below 1. Invalid operands degrade instead of failing.
//!
//! The cross-standard [`add_units`]/[`subtract_units`] never renormalize;
//! the total is expressed in the left operand's symbol.

use tracing::{debug, trace, warn};
use crate::parse::validate_symbols;
use crate::registry::{SYMBOLS, MAX_EXPONENT};
use crate::{scale, UnitError, UnitKind, UnitResult, UnitStandard, UnitValue};

impl UnitValue {
    /// Add `other` to this value.
    ///
    /// The result is expressed in this value's standard. If only one side
    /// has a valid symbol it is returned unchanged; if neither does, a zero
    /// `Byte` is returned.
    pub fn add(&self, other: &UnitValue) -> UnitValue {
        if let Some(degraded) = self.degenerate_operands(other) {
            return degraded;
        }
        let total = self.byte_size() + other.byte_size();
        let candidate = if total > 0.0 {
            (total.log2() / 10.0).round() as i32
        } else {
            0
        };
        let exponent = self.exponent().max(other.exponent()).max(candidate);
        normalize(self.standard(), exponent, total, false)
    }

    /// Subtract `other` from this value.
    ///
    /// Same degradation rules as [`add`](Self::add). The result carries a
    /// negative magnitude when `other` is the larger quantity.
    pub fn subtract(&self, other: &UnitValue) -> UnitValue {
        if let Some(degraded) = self.degenerate_operands(other) {
            return degraded;
        }
        let left = self.byte_size();
        let right = other.byte_size();
        let (total, negative) = if left >= right {
            (left - right, false)
        } else {
            (right - left, true)
        };
        let candidate = if total > 0.0 {
            total.log10().floor() as i32
        } else {
            0
        };
        let exponent = self.exponent().max(other.exponent()).max(candidate);
        normalize(self.standard(), exponent, total, negative)
    }

    /// Not defined for data units
    pub fn multiply(&self, _other: &UnitValue) -> UnitResult<UnitValue> {
        Err(UnitError::OperationNotSupported("multiply"))
    }

    /// Not defined for data units
    pub fn divide(&self, _other: &UnitValue) -> UnitResult<UnitValue> {
        Err(UnitError::OperationNotSupported("divide"))
    }

    fn degenerate_operands(&self, other: &UnitValue) -> Option<UnitValue> {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => None,
            (true, false) => {
                debug!(symbol = %other.symbol(), "ignoring operand with invalid symbol");
                Some(self.clone())
            }
            (false, true) => {
                debug!(symbol = %self.symbol(), "ignoring operand with invalid symbol");
                Some(other.clone())
            }
            (false, false) => {
                debug!(left = %self.symbol(), right = %other.symbol(), "both operands invalid, returning zero");
                Some(UnitValue::zero(self.standard()))
            }
        }
    }
}

/// Express `total` bytes at `exponent`, picking the bit or byte symbol
fn normalize(standard: UnitStandard, exponent: i32, total: f64, negative: bool) -> UnitValue {
    let clamped = exponent.clamp(0, MAX_EXPONENT);
    if clamped != exponent {
        trace!(exponent, clamped, "result exponent outside registry range");
    }
    let Some(pair) = SYMBOLS.find_by_exponent(standard, clamped) else {
        return UnitValue::zero(standard);
    };

    let bits = scale::from_bytes(standard, pair.least().as_str(), total);
    let bytes = scale::from_bytes(standard, pair.greatest().as_str(), total);
    let (kind, magnitude) = if bytes < 1.0 {
        (UnitKind::Bit, bits)
    } else {
        (UnitKind::Byte, bytes)
    };
    let magnitude = if negative { -magnitude } else { magnitude };
    UnitValue::from_pair(pair, kind, magnitude)
}

/// Add two values that may belong to different standards.
///
/// The sum is expressed in the left operand's symbol. When exactly one
/// symbol is invalid the error carries the other operand, see
/// [`UnitError::partial`].
pub fn add_units(left: &UnitValue, right: &UnitValue) -> UnitResult<UnitValue> {
    combine_units(left, right, "add", |l, r| l + r)
}

/// Subtract two values that may belong to different standards.
///
/// Same rules as [`add_units`].
pub fn subtract_units(left: &UnitValue, right: &UnitValue) -> UnitResult<UnitValue> {
    combine_units(left, right, "subtract", |l, r| l - r)
}

fn combine_units(
    left: &UnitValue,
    right: &UnitValue,
    op: &'static str,
    combine: impl Fn(f64, f64) -> f64,
) -> UnitResult<UnitValue> {
    let (lok, rok) = validate_symbols(left.symbol().as_str(), right.symbol().as_str());
    let lok = lok && left.is_valid();
    let rok = rok && right.is_valid();
    match (lok, rok) {
        (true, true) => {}
        (true, false) => return Err(dropped(op, left, right)),
        (false, true) => return Err(dropped(op, right, left)),
        (false, false) => {
            return Err(UnitError::InvalidOperands {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
    }

    let total = combine(left.byte_size(), right.byte_size());
    let unit_bytes = scale::to_bytes(left.standard(), left.symbol().as_str(), 1.0);
    UnitValue::new(left.standard(), total / unit_bytes, left.symbol())
}

fn dropped(op: &'static str, kept: &UnitValue, invalid: &UnitValue) -> UnitError {
    warn!(op, kept = %kept, dropped = %invalid.symbol(), "operand with invalid symbol dropped");
    UnitError::OperandDropped {
        kept: Box::new(kept.clone()),
        dropped: invalid.symbol().to_string(),
    }
}
