//! Scale conversion between symbols, bytes and bits
//!
//! One unit at exponent `e` is `2^(10e)` (IEC) or `10^(3e)` (SI). Bit-flavored
//! symbols count an eighth of that in bytes. All functions are total: a
//! symbol the registry does not know converts to `0`.

use crate::registry::SYMBOLS;
use crate::{UnitKind, UnitStandard};

/// Size in bytes of one byte-flavored unit at `exponent`
pub fn scale(standard: UnitStandard, exponent: i32) -> f64 {
    match standard {
        UnitStandard::Iec => 2f64.powi(10 * exponent),
        UnitStandard::Si => 10f64.powi(3 * exponent),
    }
}

/// Convert `magnitude` units of `symbol` into bytes
pub fn to_bytes(standard: UnitStandard, symbol: &str, magnitude: f64) -> f64 {
    let Some(pair) = SYMBOLS.find_by_symbol(standard, symbol) else {
        return 0.0;
    };
    match (pair.is_base(), pair.kind_of(symbol)) {
        (true, Some(UnitKind::Bit)) => magnitude / 8.0,
        (true, Some(UnitKind::Byte)) => magnitude,
        (false, Some(UnitKind::Bit)) => scale(standard, pair.exponent()) * magnitude * 0.125,
        (false, Some(UnitKind::Byte)) => scale(standard, pair.exponent()) * magnitude,
        (_, None) => 0.0,
    }
}

/// Express a byte total in units of `symbol`
pub fn from_bytes(standard: UnitStandard, symbol: &str, bytes: f64) -> f64 {
    let Some(pair) = SYMBOLS.find_by_symbol(standard, symbol) else {
        return 0.0;
    };
    match (pair.is_base(), pair.kind_of(symbol)) {
        (true, Some(UnitKind::Bit)) => bytes * 8.0,
        (true, Some(UnitKind::Byte)) => bytes,
        (false, Some(UnitKind::Bit)) => bytes * 8.0 / scale(standard, pair.exponent()),
        (false, Some(UnitKind::Byte)) => bytes / scale(standard, pair.exponent()),
        (_, None) => 0.0,
    }
}

/// Convert `magnitude` units of `symbol` into bits
pub fn to_bits(standard: UnitStandard, symbol: &str, magnitude: f64) -> f64 {
    let Some(pair) = SYMBOLS.find_by_symbol(standard, symbol) else {
        return 0.0;
    };
    if pair.is_base() && pair.kind_of(symbol) == Some(UnitKind::Bit) {
        return magnitude;
    }
    to_bytes(standard, symbol, magnitude) * 8.0
}

/// Size of `magnitude` units of `symbol` (at `exponent`) measured in `target`.
///
/// When the source exponent is above the target's, the result is the target's
/// byte form of `magnitude` multiplied by the exponent gap. That is exact for
/// a one-tier gap to a byte-flavored target and an approximation otherwise.
pub fn size_in_unit(
    standard: UnitStandard,
    symbol: &str,
    exponent: i32,
    magnitude: f64,
    target: &str,
) -> f64 {
    let source = SYMBOLS.find_by_symbol(standard, symbol);
    let target_pair = SYMBOLS.find_by_symbol(standard, target);
    let (Some(source), Some(target_pair)) = (source, target_pair) else {
        return 0.0;
    };
    if source.exponent() != exponent {
        return 0.0;
    }

    let left = to_bytes(standard, symbol, magnitude);
    let right = to_bytes(standard, target, magnitude);
    let diff = exponent - target_pair.exponent();
    if diff > 0 {
        return right * f64::from(diff);
    }
    if left != 0.0 && right != 0.0 {
        return (left / right) * magnitude;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MAX_EXPONENT;

    const IEC: UnitStandard = UnitStandard::Iec;
    const SI: UnitStandard = UnitStandard::Si;

    #[test]
    fn test_scale() {
        assert_eq!(scale(IEC, 0), 1.0);
        assert_eq!(scale(IEC, 1), 1024.0);
        assert_eq!(scale(IEC, 3), 1_073_741_824.0);
        assert_eq!(scale(SI, 1), 1000.0);
        assert_eq!(scale(SI, 3), 1e9);
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(to_bytes(IEC, "MiB", 10.0), 10_485_760.0);
        assert_eq!(to_bytes(IEC, "Mib", 10.0), 1_310_720.0);
        assert_eq!(to_bytes(SI, "MB", 10.0), 10_000_000.0);
        assert_eq!(to_bytes(SI, "Kb", 8.0), 1000.0);
        assert_eq!(to_bytes(IEC, "Byte", 3.5), 3.5);
        assert_eq!(to_bytes(SI, "Bit", 16.0), 2.0);
    }

    #[test]
    fn test_iec_scale_law() {
        for e in 1..=MAX_EXPONENT {
            let pair = SYMBOLS.find_by_exponent(IEC, e).unwrap();
            let n = 3.25;
            let expected = n * 2f64.powi(10 * e);
            assert_eq!(to_bytes(IEC, pair.greatest().as_str(), n), expected);
            assert_eq!(to_bytes(IEC, pair.least().as_str(), n), expected / 8.0);
        }
    }

    #[test]
    fn test_unregistered_symbol_is_zero() {
        assert_eq!(to_bytes(IEC, "FooBar", 10.0), 0.0);
        assert_eq!(to_bytes(IEC, "MB", 10.0), 0.0);
        assert_eq!(from_bytes(SI, "MiB", 10.0), 0.0);
        assert_eq!(to_bits(SI, "", 1.0), 0.0);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(from_bytes(IEC, "MiB", 2_359_296.0), 2.25);
        assert_eq!(from_bytes(IEC, "Mib", 2_359_296.0), 18.0);
        assert_eq!(from_bytes(SI, "GB", 2.5e9), 2.5);
        assert_eq!(from_bytes(SI, "Bit", 2.0), 16.0);
        assert_eq!(from_bytes(SI, "Byte", 2.0), 2.0);
    }

    #[test]
    fn test_to_bits() {
        assert_eq!(to_bits(IEC, "MiB", 10.0), 83_886_080.0);
        assert_eq!(to_bits(IEC, "Mib", 10.0), 10_485_760.0);
        assert_eq!(to_bits(IEC, "Bit", 7.0), 7.0);
        assert_eq!(to_bits(IEC, "Byte", 7.0), 56.0);
    }

    #[test]
    fn test_size_in_unit() {
        assert_eq!(size_in_unit(IEC, "MiB", 2, 10.0, "KiB"), 10240.0);
        assert_eq!(size_in_unit(IEC, "MiB", 2, 10.0, "GiB"), 0.009765625);
        assert_eq!(size_in_unit(IEC, "MiB", 2, 10.0, "Mib"), 80.0);
    }

    #[test]
    fn test_size_in_unit_multi_tier_gap() {
        // right * gap, not the exact 10 * 1024^2
        assert_eq!(size_in_unit(IEC, "GiB", 3, 10.0, "KiB"), 20480.0);
    }

    #[test]
    fn test_size_in_unit_degenerate() {
        assert_eq!(size_in_unit(IEC, "FooBar", 30, 5.0, "MiB"), 0.0);
        assert_eq!(size_in_unit(IEC, "MiB", 30, 5.0, "FooBar"), 0.0);
        // exponent inconsistent with the symbol
        assert_eq!(size_in_unit(IEC, "MiB", 30, 5.0, "MiB"), 0.0);
        assert_eq!(size_in_unit(IEC, "MiB", 2, 0.0, "GiB"), 0.0);
    }

    #[test]
    fn test_size_in_unit_negative_magnitude() {
        assert_eq!(size_in_unit(IEC, "MiB", 2, -4.0, "GiB"), -4.0 / 1024.0);
    }
}
