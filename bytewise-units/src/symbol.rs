//! Unit symbols and the bit/byte symbol pairs of each scale tier

use std::borrow::{Borrow, Cow};
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::UnitStandard;

/// A unit symbol token such as `"MiB"` or `"Gb"`.
///
/// Whether a symbol is legal is decided by the registry, not by this type:
/// an unregistered symbol can be held but every size query on it reports 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitSymbol(Cow<'static, str>);

macro_rules! symbols {
    ($($name:ident => $text:literal),* $(,)?) => {
        impl UnitSymbol {
            $(pub const $name: UnitSymbol = UnitSymbol(Cow::Borrowed($text));)*
        }
    };
}

symbols! {
    BIT => "Bit",
    BYTE => "Byte",
    KIB_BIT => "Kib",
    MIB_BIT => "Mib",
    GIB_BIT => "Gib",
    TIB_BIT => "Tib",
    PIB_BIT => "Pib",
    EIB_BIT => "Eib",
    ZIB_BIT => "Zib",
    YIB_BIT => "Yib",
    KIB => "KiB",
    MIB => "MiB",
    GIB => "GiB",
    TIB => "TiB",
    PIB => "PiB",
    EIB => "EiB",
    ZIB => "ZiB",
    YIB => "YiB",
    KB_BIT => "Kb",
    MB_BIT => "Mb",
    GB_BIT => "Gb",
    TB_BIT => "Tb",
    PB_BIT => "Pb",
    EB_BIT => "Eb",
    ZB_BIT => "Zb",
    YB_BIT => "Yb",
    KB => "KB",
    MB => "MB",
    GB => "GB",
    TB => "TB",
    PB => "PB",
    EB => "EB",
    ZB => "ZB",
    YB => "YB",
}

impl UnitSymbol {
    /// Wrap arbitrary text as a symbol without registering it
    pub fn new(symbol: impl Into<Cow<'static, str>>) -> Self {
        UnitSymbol(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for UnitSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UnitSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for UnitSymbol {
    fn from(s: &'static str) -> Self {
        UnitSymbol(Cow::Borrowed(s))
    }
}

impl From<String> for UnitSymbol {
    fn from(s: String) -> Self {
        UnitSymbol(Cow::Owned(s))
    }
}

impl PartialEq<str> for UnitSymbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UnitSymbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a symbol counts bits or bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Bit,
    Byte,
}

impl UnitKind {
    /// Number of bits in one unit of this kind
    pub fn bits(&self) -> f64 {
        match self {
            UnitKind::Bit => 1.0,
            UnitKind::Byte => 8.0,
        }
    }
}

/// The two symbols sharing one standard and exponent.
///
/// `least` is the bit-flavored symbol and `greatest` the byte-flavored one.
/// Exponent 0 is the base pair (`Bit`, `Byte`), present under both standards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSymbolPair {
    standard: UnitStandard,
    exponent: i32,
    least: UnitSymbol,
    greatest: UnitSymbol,
}

impl UnitSymbolPair {
    pub fn new(standard: UnitStandard, exponent: i32, least: UnitSymbol, greatest: UnitSymbol) -> Self {
        UnitSymbolPair { standard, exponent, least, greatest }
    }

    /// The base pair for a standard
    pub fn base(standard: UnitStandard) -> Self {
        Self::new(standard, 0, UnitSymbol::BIT, UnitSymbol::BYTE)
    }

    pub fn standard(&self) -> UnitStandard {
        self.standard
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn least(&self) -> &UnitSymbol {
        &self.least
    }

    pub fn greatest(&self) -> &UnitSymbol {
        &self.greatest
    }

    pub fn is_base(&self) -> bool {
        self.exponent == 0
    }

    /// Check if `symbol` is one of the two symbols of this pair
    pub fn contains(&self, symbol: &str) -> bool {
        self.least == symbol || self.greatest == symbol
    }

    /// Classify `symbol` as the bit or byte member of this pair
    pub fn kind_of(&self, symbol: &str) -> Option<UnitKind> {
        if self.least == symbol {
            Some(UnitKind::Bit)
        } else if self.greatest == symbol {
            Some(UnitKind::Byte)
        } else {
            None
        }
    }

    /// The symbol of this pair for `kind`
    pub fn symbol(&self, kind: UnitKind) -> &UnitSymbol {
        match kind {
            UnitKind::Bit => &self.least,
            UnitKind::Byte => &self.greatest,
        }
    }
}

impl fmt::Display for UnitSymbolPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} e{}: {}/{}", self.standard, self.exponent, self.least, self.greatest)
    }
}
