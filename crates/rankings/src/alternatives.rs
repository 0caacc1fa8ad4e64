use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Lookup failures on an [`Alternatives`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlternativesError {
    /// The symbol is not part of this registry.
    #[error("unknown alternative {0:?}")]
    UnknownAlternative(char),
    /// The index is outside `0..len`.
    #[error("index {index} out of range for {len} alternatives")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The canonical universe of alternatives.
///
/// Symbols are kept sorted and deduplicated, so every alternative has a
/// stable index in `0..len` for the life of the registry: the symbol at
/// position `i` has index `i`. The mapping never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternatives {
    symbols: Vec<char>,
}

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

impl Alternatives {
    /// The first `count` lowercase letters as alternatives.
    ///
    /// Fails when `count` exceeds the alphabet.
    pub fn from_count(count: usize) -> Result<Self, AlternativesError> {
        if count > ALPHABET.len() {
            return Err(AlternativesError::IndexOutOfRange {
                index: count,
                len: ALPHABET.len(),
            });
        }
        Ok(Alternatives { symbols: ALPHABET.chars().take(count).collect() })
    }

    pub fn from_symbols(symbols: &str) -> Self {
        Self::from_iter(symbols.chars())
    }

    pub fn from_iter(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut symbols: Vec<char> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Alternatives { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// The index of `symbol` in the canonical ordering.
    pub fn to_index(&self, symbol: char) -> Result<usize, AlternativesError> {
        self.symbols
            .binary_search(&symbol)
            .map_err(|_| AlternativesError::UnknownAlternative(symbol))
    }

    /// The symbol at `index` in the canonical ordering.
    pub fn to_symbol(&self, index: usize) -> Result<char, AlternativesError> {
        self.symbols.get(index).copied().ok_or(AlternativesError::IndexOutOfRange {
            index,
            len: self.symbols.len(),
        })
    }
}

impl Display for Alternatives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.symbols.iter().enumerate() {
            if i + 1 == self.symbols.len() {
                write!(f, "{}", c)?;
            } else {
                write!(f, "{}, ", c)?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_deduped() {
        let alts = Alternatives::from_symbols("cabba");
        assert_eq!(alts.len(), 3);
        let symbols: Vec<char> = alts.iter().collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }

    #[test]
    fn index_symbol_bijection() {
        let alts = Alternatives::from_symbols("zxy");
        for i in 0..alts.len() {
            let c = alts.to_symbol(i).unwrap();
            assert_eq!(alts.to_index(c).unwrap(), i);
        }
    }

    #[test]
    fn unknown_symbol() {
        let alts = Alternatives::from_symbols("abc");
        assert_eq!(alts.to_index('d'), Err(AlternativesError::UnknownAlternative('d')));
    }

    #[test]
    fn index_out_of_range() {
        let alts = Alternatives::from_symbols("abc");
        assert_eq!(
            alts.to_symbol(3),
            Err(AlternativesError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn from_count_is_alphabet_prefix() {
        let alts = Alternatives::from_count(4).unwrap();
        let symbols: Vec<char> = alts.iter().collect();
        assert_eq!(symbols, vec!['a', 'b', 'c', 'd']);
        assert!(Alternatives::from_count(27).is_err());
    }

    #[quickcheck]
    fn qc_same_symbol_same_index(symbols: String) -> bool {
        let alts = Alternatives::from_iter(symbols.chars());
        symbols.chars().all(|c| {
            let a = alts.to_index(c);
            a.is_ok() && a == alts.to_index(c)
        })
    }
}
