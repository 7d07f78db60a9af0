//! Symbol registry - every recognized unit symbol, by standard and exponent

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use crate::{UnitStandard, UnitSymbol, UnitSymbolPair};

/// Highest registered exponent (yotta/yobi tier)
pub const MAX_EXPONENT: i32 = 8;

/// Global symbol registry, built on first use and read-only afterwards
pub static SYMBOLS: LazyLock<SymbolRegistry> = LazyLock::new(SymbolRegistry::new);

/// Registry of all unit symbol pairs
#[derive(Debug)]
pub struct SymbolRegistry {
    pairs: Vec<UnitSymbolPair>,
    /// symbol -> indices into `pairs`, in registry order
    index: HashMap<UnitSymbol, Vec<usize>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        let mut registry = SymbolRegistry {
            pairs: Vec::new(),
            index: HashMap::new(),
        };
        registry.register_all_pairs();
        debug!(pairs = registry.pairs.len(), symbols = registry.index.len(), "unit symbol registry built");
        registry
    }

    /// Find the pair owning `symbol` under `standard`
    pub fn find_by_symbol(&self, standard: UnitStandard, symbol: &str) -> Option<&UnitSymbolPair> {
        self.candidates(symbol)
            .find(|pair| pair.standard() == standard)
    }

    /// Find the pair at `exponent` under `standard`
    pub fn find_by_exponent(&self, standard: UnitStandard, exponent: i32) -> Option<&UnitSymbolPair> {
        self.pairs.iter()
            .find(|pair| pair.standard() == standard && pair.exponent() == exponent)
    }

    /// Find the first pair owning `symbol` under any standard.
    ///
    /// Bit and Byte belong to both standards; registry order makes them SI.
    pub fn find_standard(&self, symbol: &str) -> Option<&UnitSymbolPair> {
        self.candidates(symbol).next()
    }

    /// The bit-flavored symbol at `exponent`
    pub fn least_symbol(&self, standard: UnitStandard, exponent: i32) -> Option<&UnitSymbol> {
        self.find_by_exponent(standard, exponent).map(|pair| pair.least())
    }

    /// The byte-flavored symbol at `exponent`
    pub fn greatest_symbol(&self, standard: UnitStandard, exponent: i32) -> Option<&UnitSymbol> {
        self.find_by_exponent(standard, exponent).map(|pair| pair.greatest())
    }

    pub fn contains(&self, standard: UnitStandard, symbol: &str) -> bool {
        self.find_by_symbol(standard, symbol).is_some()
    }

    /// All pairs in registry order
    pub fn pairs(&self) -> &[UnitSymbolPair] {
        &self.pairs
    }

    /// Every symbol of a standard, ordered by exponent, bit before byte
    pub fn symbols(&self, standard: UnitStandard) -> Vec<&UnitSymbol> {
        let mut pairs: Vec<&UnitSymbolPair> = self.pairs.iter()
            .filter(|pair| pair.standard() == standard)
            .collect();
        pairs.sort_by_key(|pair| pair.exponent());
        pairs.into_iter()
            .flat_map(|pair| [pair.least(), pair.greatest()])
            .collect()
    }

    fn candidates<'a>(&'a self, symbol: &str) -> impl Iterator<Item = &'a UnitSymbolPair> + 'a {
        self.index.get(symbol)
            .into_iter()
            .flatten()
            .map(move |&i| &self.pairs[i])
    }

    fn register(&mut self, pair: UnitSymbolPair) {
        let i = self.pairs.len();
        for symbol in [pair.least().clone(), pair.greatest().clone()] {
            self.index.entry(symbol).or_default().push(i);
        }
        self.pairs.push(pair);
    }

    fn register_all_pairs(&mut self) {
        self.register(UnitSymbolPair::base(UnitStandard::Si));
        self.register(UnitSymbolPair::base(UnitStandard::Iec));
        self.register_iec_pairs();
        self.register_si_pairs();
    }

    fn register_iec_pairs(&mut self) {
        let tiers = [
            (UnitSymbol::KIB_BIT, UnitSymbol::KIB),
            (UnitSymbol::MIB_BIT, UnitSymbol::MIB),
            (UnitSymbol::GIB_BIT, UnitSymbol::GIB),
            (UnitSymbol::TIB_BIT, UnitSymbol::TIB),
            (UnitSymbol::PIB_BIT, UnitSymbol::PIB),
            (UnitSymbol::EIB_BIT, UnitSymbol::EIB),
            (UnitSymbol::ZIB_BIT, UnitSymbol::ZIB),
            (UnitSymbol::YIB_BIT, UnitSymbol::YIB),
        ];
        for (exponent, (least, greatest)) in (1..).zip(tiers) {
            self.register(UnitSymbolPair::new(UnitStandard::Iec, exponent, least, greatest));
        }
    }

    fn register_si_pairs(&mut self) {
        let tiers = [
            (UnitSymbol::KB_BIT, UnitSymbol::KB),
            (UnitSymbol::MB_BIT, UnitSymbol::MB),
            (UnitSymbol::GB_BIT, UnitSymbol::GB),
            (UnitSymbol::TB_BIT, UnitSymbol::TB),
            (UnitSymbol::PB_BIT, UnitSymbol::PB),
            (UnitSymbol::EB_BIT, UnitSymbol::EB),
            (UnitSymbol::ZB_BIT, UnitSymbol::ZB),
            (UnitSymbol::YB_BIT, UnitSymbol::YB),
        ];
        for (exponent, (least, greatest)) in (1..).zip(tiers) {
            self.register(UnitSymbolPair::new(UnitStandard::Si, exponent, least, greatest));
        }
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
