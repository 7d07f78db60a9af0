//! Bytewise Units - Data Size Quantities and Arithmetic
//!
//! Represents digital storage and transfer quantities ("5 MiB", "10 Gb")
//! under the two prefix systems of the SI Brochure / IEC 80000-13.
//!
//! Standards:
//! - IEC (binary): Kib/KiB up to Yib/YiB, 1 KiB = 1024 bytes
//! - SI (decimal): Kb/KB up to Yb/YB, 1 KB = 1000 bytes
//! - Bit and Byte belong to both
//!
//! Operations:
//! - Construction with registry validation ([`UnitValue::new`])
//! - Conversion to bytes, bits or another symbol
//! - Same-standard add/subtract with result normalization
//! - Cross-standard [`add_units`]/[`subtract_units`] in the left operand's scale
//! - Parsing of "<number> <symbol>" strings ([`parse`])

mod standard;
mod symbol;
mod registry;
mod scale;
mod value;
mod arith;
mod parse;
mod error;

pub use standard::UnitStandard;
pub use symbol::{UnitSymbol, UnitKind, UnitSymbolPair};
pub use registry::{SymbolRegistry, SYMBOLS, MAX_EXPONENT};
pub use scale::{scale, to_bytes, from_bytes, to_bits, size_in_unit};
pub use value::UnitValue;
pub use arith::{add_units, subtract_units};
pub use parse::{parse, validate_symbol, validate_symbols};
pub use error::{UnitError, UnitResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        let a = parse("2 Mib").unwrap();
        let b = UnitValue::new(UnitStandard::Iec, 2.0, UnitSymbol::MIB).unwrap();
        assert_eq!(a.add(&b).to_string(), "2.25 MiB");

        let sum = add_units(&parse("1 GB").unwrap(), &parse("1 GiB").unwrap()).unwrap();
        assert_eq!(format!("{:.6} {}", sum.magnitude(), sum.symbol()), "2.073742 GB");

        assert!(validate_symbol("ZiB"));
        assert_eq!(SYMBOLS.pairs().len(), 18);
    }
}
