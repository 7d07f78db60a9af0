//! Quantity string parsing - "<number> <symbol>" into a unit value

use crate::registry::SYMBOLS;
use crate::{UnitError, UnitResult, UnitValue};

/// Parse a quantity string like "5 MiB", "-2.5Gb" or "+10 KB".
///
/// The grammar is an optional sign, digits, an optional fraction, optional
/// whitespace, then a case-sensitive symbol. The standard is taken from the
/// registry entry owning the symbol.
pub fn parse(input: &str) -> UnitResult<UnitValue> {
    let (magnitude, symbol) = split_quantity(input)
        .ok_or_else(|| UnitError::CouldNotBeParsed(input.to_string()))?;

    let pair = SYMBOLS.find_standard(symbol)
        .ok_or_else(|| UnitError::StandardNotSupported(symbol.to_string()))?;

    UnitValue::new(pair.standard(), magnitude, symbol)
}

/// Check a symbol by parsing it as a zero-sized quantity
pub fn validate_symbol(symbol: &str) -> bool {
    parse(&format!("{} {}", 0, symbol)).is_ok()
}

/// Validate two symbols at once
pub fn validate_symbols(left: &str, right: &str) -> (bool, bool) {
    (validate_symbol(left), validate_symbol(right))
}

/// Split into the numeric part and the symbol token
fn split_quantity(input: &str) -> Option<(f64, &str)> {
    let s = input.trim();
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let digits = skip_digits(bytes, pos);
    if digits == pos {
        return None;
    }
    pos = digits;

    if bytes.get(pos) == Some(&b'.') {
        let fraction = skip_digits(bytes, pos + 1);
        if fraction == pos + 1 {
            return None;
        }
        pos = fraction;
    }

    let number = &s[..pos];
    let symbol = s[pos..].trim_start();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let magnitude = number.parse::<f64>().ok()?;
    Some((magnitude, symbol))
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}
