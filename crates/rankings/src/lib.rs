//! Building blocks for preference aggregation: a canonical registry of
//! alternatives, strict linear orders&nbsp;(rankings) over them, and packed
//! collections of rankings&nbsp;(profiles).
//!
//! Alternatives are identified by symbols at the API boundary and by
//! contiguous indices `0..n` everywhere else. The [`Alternatives`] registry
//! is the only place where the two meet; rankings and profiles store indices.
//!
//! ```
//! use rankings::{Profile, Ranking};
//!
//! let profile = Profile::from_symbols(&["abc", "abc", "bac"]).unwrap();
//! assert_eq!(profile.voters(), 3);
//! assert_eq!(profile.margin(0, 1), 1);
//!
//! let ranking = Ranking::from_symbols("cab", profile.alternatives()).unwrap();
//! assert_eq!(ranking.position_of(2).unwrap(), 0);
//! ```

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod alternatives;
pub mod profile;
pub mod ranking;

pub use alternatives::{Alternatives, AlternativesError};
pub use profile::{Profile, ProfileError};
pub use ranking::{Ranking, RankingError, RankingRef};

// Every value is in `0..elements` and no value repeats, i.e. `order` is a
// permutation of `0..elements` whenever it has `elements` entries.
pub(crate) fn unique_and_bounded(elements: usize, order: &[usize]) -> bool {
    let seen: &mut [bool] = &mut vec![false; elements];
    for &a in order {
        if a >= elements || seen[a] {
            return false;
        }
        seen[a] = true;
    }
    true
}
