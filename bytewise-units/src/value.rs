//! Unit value - a magnitude measured in a registered data unit symbol

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::registry::SYMBOLS;
use crate::{scale, parse, UnitError, UnitKind, UnitResult, UnitStandard, UnitSymbol, UnitSymbolPair};

/// A data quantity such as `5 MiB` or `10 Gb`.
///
/// The exponent is always derived from the symbol at construction. Values are
/// immutable; arithmetic returns new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawUnitValue", into = "RawUnitValue")]
pub struct UnitValue {
    standard: UnitStandard,
    magnitude: f64,
    symbol: UnitSymbol,
    exponent: i32,
}

impl UnitValue {
    /// Create a value, failing if `symbol` is not registered under `standard`
    pub fn new(standard: UnitStandard, magnitude: f64, symbol: impl AsRef<str>) -> UnitResult<Self> {
        let symbol = symbol.as_ref();
        let pair = SYMBOLS.find_by_symbol(standard, symbol)
            .ok_or_else(|| UnitError::symbol_not_supported(symbol))?;
        let kind = pair.kind_of(symbol)
            .ok_or_else(|| UnitError::symbol_not_supported(symbol))?;
        Ok(Self::from_pair(pair, kind, magnitude))
    }

    /// Create a binary (IEC) value
    pub fn iec(magnitude: f64, symbol: impl AsRef<str>) -> UnitResult<Self> {
        Self::new(UnitStandard::Iec, magnitude, symbol)
    }

    /// Create a decimal (SI) value
    pub fn si(magnitude: f64, symbol: impl AsRef<str>) -> UnitResult<Self> {
        Self::new(UnitStandard::Si, magnitude, symbol)
    }

    /// A zero-sized `Byte` value
    pub fn zero(standard: UnitStandard) -> Self {
        Self::from_pair(&UnitSymbolPair::base(standard), UnitKind::Byte, 0.0)
    }

    /// Assemble a value without consulting the registry.
    ///
    /// Nothing is validated. Size queries on a value whose symbol is not
    /// registered, or whose exponent disagrees with the registry, return 0.
    pub fn from_raw_parts(standard: UnitStandard, magnitude: f64, symbol: UnitSymbol, exponent: i32) -> Self {
        UnitValue { standard, magnitude, symbol, exponent }
    }

    pub(crate) fn from_pair(pair: &UnitSymbolPair, kind: UnitKind, magnitude: f64) -> Self {
        UnitValue {
            standard: pair.standard(),
            magnitude,
            symbol: pair.symbol(kind).clone(),
            exponent: pair.exponent(),
        }
    }

    pub fn standard(&self) -> UnitStandard {
        self.standard
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Same as [`magnitude`](Self::magnitude)
    pub fn size(&self) -> f64 {
        self.magnitude
    }

    pub fn symbol(&self) -> &UnitSymbol {
        &self.symbol
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The registry pair for this value's symbol, if registered
    pub fn pair(&self) -> Option<&'static UnitSymbolPair> {
        SYMBOLS.find_by_symbol(self.standard, self.symbol.as_str())
    }

    /// Whether this value counts bits or bytes
    pub fn kind(&self) -> Option<UnitKind> {
        self.pair().and_then(|pair| pair.kind_of(self.symbol.as_str()))
    }

    /// Check the symbol is registered and the exponent agrees with it
    pub fn is_valid(&self) -> bool {
        self.pair().is_some_and(|pair| pair.exponent() == self.exponent)
    }

    /// Size measured in bytes
    pub fn byte_size(&self) -> f64 {
        scale::to_bytes(self.standard, self.symbol.as_str(), self.magnitude)
    }

    /// Size measured in bits
    pub fn bit_size(&self) -> f64 {
        scale::to_bits(self.standard, self.symbol.as_str(), self.magnitude)
    }

    /// Size measured in another symbol of the same standard
    pub fn size_in_unit(&self, symbol: impl AsRef<str>) -> f64 {
        scale::size_in_unit(
            self.standard,
            self.symbol.as_str(),
            self.exponent,
            self.magnitude,
            symbol.as_ref(),
        )
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.symbol)
    }
}

impl FromStr for UnitValue {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

/// Serialized form; the exponent is re-derived on the way in
#[derive(Serialize, Deserialize)]
struct RawUnitValue {
    standard: UnitStandard,
    magnitude: f64,
    symbol: UnitSymbol,
}

impl TryFrom<RawUnitValue> for UnitValue {
    type Error = UnitError;

    fn try_from(raw: RawUnitValue) -> Result<Self, Self::Error> {
        UnitValue::new(raw.standard, raw.magnitude, raw.symbol)
    }
}

impl From<UnitValue> for RawUnitValue {
    fn from(value: UnitValue) -> Self {
        RawUnitValue {
            standard: value.standard,
            magnitude: value.magnitude,
            symbol: value.symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_unit(magnitude: f64) -> UnitValue {
        UnitValue::from_raw_parts(UnitStandard::Iec, magnitude, UnitSymbol::new("FooBar"), 30)
    }

    #[test]
    fn test_new_derives_exponent() {
        let a = UnitValue::iec(10.0, UnitSymbol::MIB_BIT).unwrap();
        assert_eq!(a.exponent(), 2);
        assert_eq!(a.symbol(), &UnitSymbol::MIB_BIT);
        assert_eq!(a.size(), 10.0);

        let b = UnitValue::iec(1.0, "GiB").unwrap();
        assert_eq!(b.exponent(), 3);
        assert_eq!(b.standard(), UnitStandard::Iec);

        let c = UnitValue::si(10.0, "MB").unwrap();
        assert_eq!(c.exponent(), 2);
        assert_eq!(c.kind(), Some(UnitKind::Byte));
    }

    #[test]
    fn test_new_rejects_unregistered() {
        let err = UnitValue::iec(3.0, "").unwrap_err();
        assert_eq!(err.to_string(), "unit symbol not supported: empty symbol");

        let err = UnitValue::iec(32.0, "fooBar").unwrap_err();
        assert_eq!(err.to_string(), "unit symbol not supported: fooBar");

        // registered, but under the other standard
        let err = UnitValue::si(1.0, "MiB").unwrap_err();
        assert_eq!(err, UnitError::SymbolNotSupported("MiB".to_string()));
    }

    #[test]
    fn test_byte_size() {
        assert_eq!(UnitValue::iec(10.0, "MiB").unwrap().byte_size(), 10_485_760.0);
        assert_eq!(UnitValue::iec(10.0, "Mib").unwrap().byte_size(), 1_310_720.0);
        assert_eq!(UnitValue::si(10.0, "MB").unwrap().byte_size(), 10_000_000.0);
    }

    #[test]
    fn test_bit_size() {
        assert_eq!(UnitValue::iec(10.0, "MiB").unwrap().bit_size(), 83_886_080.0);
        assert_eq!(UnitValue::iec(10.0, "Mib").unwrap().bit_size(), 10_485_760.0);
        assert_eq!(UnitValue::iec(6.0, "Bit").unwrap().bit_size(), 6.0);
    }

    #[test]
    fn test_size_in_unit() {
        let a = UnitValue::iec(10.0, "MiB").unwrap();
        assert_eq!(a.size_in_unit("KiB"), 10240.0);
        assert_eq!(a.size_in_unit(UnitSymbol::GIB), 0.009765625);
        assert_eq!(a.size_in_unit("Mib"), 80.0);
    }

    #[test]
    fn test_round_trip_every_symbol() {
        for standard in UnitStandard::ALL {
            for symbol in SYMBOLS.symbols(standard) {
                let u = UnitValue::new(standard, 1.0, symbol).unwrap();
                assert!(u.byte_size() > 0.0);
                assert!((u.size_in_unit(symbol) - 1.0).abs() < 1e-12, "{}", symbol);
            }
        }
    }

    #[test]
    fn test_degenerate_value_sizes_are_zero() {
        let u = bad_unit(4.2);
        assert!(!u.is_valid());
        assert_eq!(u.byte_size(), 0.0);
        assert_eq!(u.bit_size(), 0.0);
        assert_eq!(u.size_in_unit("MiB"), 0.0);

        let inconsistent = UnitValue::from_raw_parts(UnitStandard::Iec, 4.2, UnitSymbol::MIB, 30);
        assert!(!inconsistent.is_valid());
        assert_eq!(inconsistent.size_in_unit("FooBar"), 0.0);
        assert_eq!(inconsistent.size_in_unit("MiB"), 0.0);
    }

    #[test]
    fn test_zero() {
        let z = UnitValue::zero(UnitStandard::Si);
        assert_eq!(z.symbol(), &UnitSymbol::BYTE);
        assert_eq!(z.magnitude(), 0.0);
        assert!(z.is_valid());
    }

    #[test]
    fn test_display_and_from_str() {
        let u: UnitValue = "1 MiB".parse().unwrap();
        assert_eq!(u.to_string(), "1 MiB");
        assert_eq!(UnitValue::si(2.5, "Gb").unwrap().to_string(), "2.5 Gb");
    }

    #[test]
    fn test_serde_round_trip() {
        let u = UnitValue::iec(2.25, "MiB").unwrap();
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(json, r#"{"standard":"IEC","magnitude":2.25,"symbol":"MiB"}"#);
        let back: UnitValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, u);
        assert_eq!(back.exponent(), 2);
    }

    #[test]
    fn test_serde_rejects_unregistered_symbol() {
        let json = r#"{"standard":"SI","magnitude":1.0,"symbol":"KiB"}"#;
        let err = serde_json::from_str::<UnitValue>(json).unwrap_err();
        assert!(err.to_string().contains("unit symbol not supported: KiB"));
    }
}
