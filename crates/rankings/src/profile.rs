use std::fmt::{self, Display};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::{
    alternatives::Alternatives,
    ranking::{RankingError, RankingRef},
    unique_and_bounded,
};

/// Construction failures on profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// A profile needs at least one ballot over at least one alternative.
    #[error("profile has no ballots or no alternatives")]
    EmptyProfile,
    /// A ballot does not range over the profile's alternative universe.
    #[error("ballot {ballot} does not range over the profile's alternatives")]
    InconsistentAlternatives { ballot: usize },
    /// A ballot is not a strict total order.
    #[error(transparent)]
    Ranking(#[from] RankingError),
}

/// An ordered collection of ballots, each a complete strict ranking of the
/// same alternatives.
///
/// Ballots are packed into one flat `Vec<usize>`, `elements` indices per
/// ballot, and share a single [`Alternatives`] registry. A profile is built
/// once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    orders: Vec<usize>,
    alternatives: Alternatives,
}

impl Profile {
    /// Build a profile from symbol ballots such as `["abc", "bca"]`.
    ///
    /// The registry is derived from the first ballot; every ballot has to be
    /// a permutation of the same symbols.
    pub fn from_symbols<S: AsRef<str>>(ballots: &[S]) -> Result<Self, ProfileError> {
        let first = ballots.first().ok_or(ProfileError::EmptyProfile)?;
        let alternatives = Alternatives::from_symbols(first.as_ref());
        if alternatives.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }
        let elements = alternatives.len();
        let mut orders = Vec::with_capacity(ballots.len() * elements);
        for (i, ballot) in ballots.iter().enumerate() {
            let mut order = Vec::with_capacity(elements);
            for c in ballot.as_ref().chars() {
                match alternatives.to_index(c) {
                    Ok(x) => order.push(x),
                    // A symbol outside the registry means the ballots disagree
                    // on the universe, not that the ballot is malformed.
                    Err(_) => return Err(ProfileError::InconsistentAlternatives { ballot: i }),
                }
            }
            if order.len() != elements {
                return Err(ProfileError::InconsistentAlternatives { ballot: i });
            }
            if !unique_and_bounded(elements, &order) {
                return Err(ProfileError::Ranking(RankingError::InvalidRanking {
                    elements,
                    len: order.len(),
                }));
            }
            orders.extend_from_slice(&order);
        }
        let profile = Profile { orders, alternatives };
        debug_assert!(profile.valid());
        Ok(profile)
    }

    /// Build a profile from index ballots, each a permutation of `0..elements`.
    pub fn from_indices(elements: usize, ballots: &[Vec<usize>]) -> Result<Self, ProfileError> {
        if ballots.is_empty() || elements == 0 {
            return Err(ProfileError::EmptyProfile);
        }
        let alternatives = Alternatives::from_count(elements).map_err(RankingError::from)?;
        let mut orders = Vec::with_capacity(ballots.len() * elements);
        for (i, ballot) in ballots.iter().enumerate() {
            if ballot.len() != elements {
                return Err(ProfileError::InconsistentAlternatives { ballot: i });
            }
            if !unique_and_bounded(elements, ballot) {
                return Err(ProfileError::Ranking(RankingError::InvalidRanking {
                    elements,
                    len: ballot.len(),
                }));
            }
            orders.extend_from_slice(ballot);
        }
        let profile = Profile { orders, alternatives };
        debug_assert!(profile.valid());
        Ok(profile)
    }

    /// Sample `voters` uniformly random ballots over `alternatives`, using
    /// random numbers from `rng`.
    pub fn generate_uniform<R: rand::Rng>(
        rng: &mut R,
        alternatives: Alternatives,
        voters: usize,
    ) -> Result<Self, ProfileError> {
        if voters == 0 || alternatives.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }
        let elements = alternatives.len();
        let mut v: Vec<usize> = (0..elements).collect();
        let mut orders = Vec::with_capacity(elements * voters);
        for _ in 0..voters {
            v.shuffle(rng);
            orders.extend_from_slice(&v);
        }
        Ok(Profile { orders, alternatives })
    }

    pub fn elements(&self) -> usize {
        self.alternatives.len()
    }

    pub fn voters(&self) -> usize {
        debug_assert!(self.orders.len() % self.alternatives.len() == 0);
        self.orders.len() / self.alternatives.len()
    }

    pub fn alternatives(&self) -> &Alternatives {
        &self.alternatives
    }

    pub fn try_get(&self, i: usize) -> Option<RankingRef> {
        if i >= self.voters() {
            None
        } else {
            let start = i * self.elements();
            let end = start + self.elements();
            // The constructors only ever store permutations.
            Some(unsafe { RankingRef::new_unchecked(&self.orders[start..end]) })
        }
    }

    pub fn get(&self, i: usize) -> RankingRef {
        self.try_get(i).expect("ballot index out of range")
    }

    pub fn iter(&self) -> impl Iterator<Item = RankingRef> {
        (0..self.voters()).map(|i| self.get(i))
    }

    /// The number of ballots ranking `x` strictly before `y`.
    pub fn support(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.elements() && y < self.elements());
        let mut s = 0;
        for ballot in self.iter() {
            let px = ballot.position_of(x).expect("alternative in every ballot");
            let py = ballot.position_of(y).expect("alternative in every ballot");
            if px < py {
                s += 1;
            }
        }
        s
    }

    /// The margin of victory of `x` over `y`; antisymmetric, can be negative.
    pub fn margin(&self, x: usize, y: usize) -> i64 {
        self.support(x, y) as i64 - self.support(y, x) as i64
    }

    // Check the packed representation, used for debugging.
    fn valid(&self) -> bool {
        let elements = self.alternatives.len();
        elements != 0
            && !self.orders.is_empty()
            && self.orders.len() % elements == 0
            && self
                .orders
                .chunks_exact(elements)
                .all(|ballot| unique_and_bounded(elements, ballot))
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.voters();
        write!(f, "[")?;
        for (i, ballot) in self.iter().enumerate() {
            if i + 1 == end {
                write!(f, "{}", ballot)?;
            } else {
                write!(f, "{}, ", ballot)?;
            }
        }
        write!(f, "]")
    }
}
