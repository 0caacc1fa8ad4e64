use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{
    alternatives::{Alternatives, AlternativesError},
    unique_and_bounded,
};

/// Construction and lookup failures on rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    /// The input is not a permutation of `0..elements`.
    #[error("sequence of length {len} is not a permutation of 0..{elements}")]
    InvalidRanking { elements: usize, len: usize },
    /// The alternative does not appear in this ranking.
    #[error("alternative {0} not found in ranking")]
    AlternativeNotFound(usize),
    /// Symbol conversion against a registry failed.
    #[error(transparent)]
    Alternatives(#[from] AlternativesError),
}

/// A strict linear order over all `n` alternatives, stored as the sequence of
/// indices from most to least preferred. Always a permutation of `0..n`.
///
/// Rankings compare by value, so they can populate sets without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Ranking {
    order: Vec<usize>,
}

impl Ranking {
    /// Create a ranking from a sequence of indices.
    pub fn from_indices(order: Vec<usize>) -> Result<Self, RankingError> {
        if !unique_and_bounded(order.len(), &order) {
            return Err(RankingError::InvalidRanking { elements: order.len(), len: order.len() });
        }
        Ok(Ranking { order })
    }

    /// Create a ranking from a string of symbols, resolved against `alternatives`.
    ///
    /// The string must mention every registered symbol exactly once.
    pub fn from_symbols(symbols: &str, alternatives: &Alternatives) -> Result<Self, RankingError> {
        let mut order = Vec::with_capacity(alternatives.len());
        for c in symbols.chars() {
            order.push(alternatives.to_index(c)?);
        }
        if order.len() != alternatives.len() || !unique_and_bounded(alternatives.len(), &order) {
            return Err(RankingError::InvalidRanking {
                elements: alternatives.len(),
                len: order.len(),
            });
        }
        Ok(Ranking { order })
    }

    /// Create a ranking without checking that `order` is a permutation.
    ///
    /// # Safety
    ///
    /// `order` has to be a permutation of `0..order.len()`.
    pub unsafe fn from_indices_unchecked(order: Vec<usize>) -> Self {
        Ranking { order }
    }

    pub fn elements(&self) -> usize {
        self.order.len()
    }

    pub fn as_ref(&self) -> RankingRef {
        RankingRef { order: &self.order }
    }

    pub fn get_inner(self) -> Vec<usize> {
        let Self { order } = self;
        order
    }

    /// All ordered pairs `(x, y)` where `x` precedes `y`; `n·(n-1)/2` in total.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.as_ref().edges()
    }

    /// The position of `alternative` in the sequence, `0` being most preferred.
    pub fn position_of(&self, alternative: usize) -> Result<usize, RankingError> {
        self.as_ref().position_of(alternative)
    }

    /// Render the ranking as a symbol string against `alternatives`.
    pub fn to_symbols(&self, alternatives: &Alternatives) -> Result<String, RankingError> {
        let mut s = String::with_capacity(self.order.len());
        for &i in &self.order {
            s.push(alternatives.to_symbol(i)?);
        }
        Ok(s)
    }
}

impl TryFrom<Vec<usize>> for Ranking {
    type Error = RankingError;

    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        Ranking::from_indices(order)
    }
}

impl From<Ranking> for Vec<usize> {
    fn from(ranking: Ranking) -> Self {
        ranking.order
    }
}

impl Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_ref(), f)
    }
}

/// A borrowed ranking over a `&[usize]` slice, handed out by packed
/// collections without allocating.
#[derive(Debug, Clone, Copy)]
pub struct RankingRef<'a> {
    pub(crate) order: &'a [usize],
}

impl<'a> RankingRef<'a> {
    /// Create a new `RankingRef` from a permutation of `0..v.len()`.
    pub fn new(v: &'a [usize]) -> Self {
        assert!(unique_and_bounded(v.len(), v));
        RankingRef { order: v }
    }

    /// # Safety
    ///
    /// `v` has to be a permutation of `0..v.len()`.
    pub unsafe fn new_unchecked(v: &'a [usize]) -> Self {
        RankingRef { order: v }
    }

    pub fn elements(&self) -> usize {
        self.order.len()
    }

    pub fn as_slice(&self) -> &'a [usize] {
        self.order
    }

    pub fn to_owned(self) -> Ranking {
        Ranking { order: self.order.to_vec() }
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.order.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((self.order[i], self.order[j]));
            }
        }
        edges
    }

    pub fn position_of(&self, alternative: usize) -> Result<usize, RankingError> {
        self.order
            .iter()
            .position(|&x| x == alternative)
            .ok_or(RankingError::AlternativeNotFound(alternative))
    }
}

impl Display for RankingRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.order.len();
        write!(f, "[")?;
        for (i, v) in self.order.iter().enumerate() {
            if i + 1 == end {
                write!(f, "{}", v)?;
            } else {
                write!(f, "{}, ", v)?;
            }
        }
        write!(f, "]")
    }
}
