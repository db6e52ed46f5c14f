//! The fixed character table.

/// One table entry: a symbol and its `(base, exp1, exp2)` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharEntry {
    /// The plaintext symbol.
    pub symbol: char,
    /// Base raised to both exponents during encoding.
    pub base: u64,
    /// Exponent for the first component of the encoded pair.
    pub exp1: u64,
    /// Exponent for the second component, before the public-key perturbation.
    pub exp2: u64,
}

/// The supported alphabet, in scan order. Decoding returns the first entry
/// whose recomputed pair matches, so this order is observable behavior.
pub const CHAR_TABLE: [CharEntry; 3] = [
    CharEntry {
        symbol: 'A',
        base: 2,
        exp1: 3,
        exp2: 4,
    },
    CharEntry {
        symbol: 'B',
        base: 3,
        exp1: 2,
        exp2: 5,
    },
    CharEntry {
        symbol: 'C',
        base: 5,
        exp1: 2,
        exp2: 3,
    },
];

/// Returns the table entry for `symbol`, or `None` if it is outside the
/// supported alphabet.
pub fn lookup_char(symbol: char) -> Option<&'static CharEntry> {
    CHAR_TABLE.iter().find(|entry| entry.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_symbols() {
        let b = lookup_char('B').expect("'B' is in the table");
        assert_eq!((b.base, b.exp1, b.exp2), (3, 2, 5));
        assert_eq!(lookup_char('A').map(|e| e.base), Some(2));
        assert_eq!(lookup_char('C').map(|e| e.exp2), Some(3));
    }

    #[test]
    fn lookup_unknown_symbol() {
        assert_eq!(lookup_char('Z'), None);
        assert_eq!(lookup_char('a'), None);
    }

    #[test]
    fn symbols_are_unique() {
        for (i, lhs) in CHAR_TABLE.iter().enumerate() {
            for rhs in &CHAR_TABLE[i + 1..] {
                assert_ne!(lhs.symbol, rhs.symbol);
            }
        }
    }
}
