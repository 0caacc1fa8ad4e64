//! Distance-rationalizable voting rules over majority graphs.
//!
//! A [`Profile`](rankings::Profile) of ballots induces a weighted
//! [`MajorityGraph`](graph::MajorityGraph); the [`Slater`](methods::Slater)
//! and [`Kemeny`](methods::Kemeny) rules select the rankings closest to that
//! graph, unweighted and weighted respectively. Closest means minimal
//! inverted majority mass, found by exhaustively scoring all `n!` rankings —
//! correctness over scale, by design.
//!
//! ```
//! use rankdist::methods::VotingRules;
//! use rankings::Profile;
//!
//! let profile = Profile::from_symbols(&["abc", "abc", "bac"]).unwrap();
//! let rules = VotingRules::from_profile(&profile);
//!
//! let outcome = rules.compute_slater().unwrap();
//! assert_eq!(outcome.score, 0);
//! let winner = outcome.rankings.iter().next().unwrap();
//! assert_eq!(winner.to_symbols(profile.alternatives()).unwrap(), "abc");
//! ```
//!
//! Rendering a majority graph (layouts, edge labels) is left to external
//! graph tooling; [`MajorityGraph`](graph::MajorityGraph) feeds it nodes,
//! edges, weights and [`cycles`](graph::MajorityGraph::cycles).

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod distance;
pub mod generate;
pub mod graph;
pub mod methods;
pub mod tarjan;

pub use graph::{GraphError, MajorityGraph};
pub use methods::{Kemeny, RankingRule, RuleError, RuleOutcome, Slater, VotingRules};
pub use rankings;

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
    use rankings::{Alternatives, Profile, Ranking};

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a standard rng generated from `Gen`
    pub fn std_rng(g: &mut Gen) -> StdRng {
        let mut seed = [0u8; 32];
        for s in seed.iter_mut() {
            *s = Arbitrary::arbitrary(g);
        }
        StdRng::from_seed(seed)
    }

    /// A small random profile; sizes stay tiny because the sweeps under test
    /// enumerate `n!` rankings.
    #[derive(Debug, Clone)]
    pub struct ArbProfile(pub Profile);

    impl Arbitrary for ArbProfile {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut rng = std_rng(g);
            let elements = 1 + usize::arbitrary(g) % 5;
            let voters = 1 + usize::arbitrary(g) % 9;
            let alternatives = Alternatives::from_count(elements).unwrap();
            ArbProfile(Profile::generate_uniform(&mut rng, alternatives, voters).unwrap())
        }
    }

    /// A seed for a random ranking of any requested size.
    #[derive(Debug, Clone)]
    pub struct ArbRanking(u64);

    impl Arbitrary for ArbRanking {
        fn arbitrary(g: &mut Gen) -> Self {
            ArbRanking(u64::arbitrary(g))
        }
    }

    impl ArbRanking {
        pub fn resized(&self, elements: usize) -> Ranking {
            let mut rng = StdRng::seed_from_u64(self.0);
            let mut order: Vec<usize> = (0..elements).collect();
            order.shuffle(&mut rng);
            Ranking::from_indices(order).expect("shuffled range is a permutation")
        }
    }
}
