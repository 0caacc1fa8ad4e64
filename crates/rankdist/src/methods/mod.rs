//! The rule evaluators.
//!
//! Both rules sweep every ranking of the graph's nodes and keep the set of
//! rankings closest to the graph; they differ only in whether the majority
//! margins weigh in. The sweep visits `n!` rankings, each scored in `O(n²)`.

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use rankings::{Profile, Ranking};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{distance, generate::all_rankings, graph::MajorityGraph};

mod kemeny;
mod slater;
pub use kemeny::Kemeny;
pub use slater::Slater;

/// Evaluation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Zero alternatives leave nothing to rank. Recoverable: callers report
    /// "no ranking" rather than aborting.
    #[error("no alternatives to rank")]
    EmptyInput,
}

/// The winning rankings of one rule evaluation and their shared score.
///
/// Every member achieves `score`, and every ranking outside the set scores
/// strictly higher; ties are kept in full, never broken arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rankings: BTreeSet<Ranking>,
    pub score: usize,
}

impl Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, ranking) in self.rankings.iter().enumerate() {
            if i + 1 == self.rankings.len() {
                write!(f, "{}", ranking)?;
            } else {
                write!(f, "{}, ", ranking)?;
            }
        }
        write!(f, "}} at distance {}", self.score)
    }
}

/// A rule that selects the rankings closest to a majority graph.
pub trait RankingRule {
    /// Evaluate the rule against `graph`.
    fn compute(graph: &MajorityGraph) -> Result<Self, RuleError>
    where
        Self: Sized;

    fn outcome(&self) -> &RuleOutcome;

    fn into_outcome(self) -> RuleOutcome;
}

// The shared sweep: enumerate every ranking over the graph's nodes, score it
// by inverted majority mass, and keep all minimizers.
pub(crate) fn closest_to_graph(graph: &MajorityGraph) -> Result<RuleOutcome, RuleError> {
    if graph.elements() == 0 {
        return Err(RuleError::EmptyInput);
    }
    debug!(elements = graph.elements(), "enumerating rankings");
    let mut rankings = BTreeSet::new();
    let mut minimal_score = usize::MAX;
    for ranking in all_rankings(graph.elements()) {
        let score = distance::inversions(graph, ranking.as_ref());
        if score < minimal_score {
            trace!(score, %ranking, "new minimal score");
            rankings.clear();
            rankings.insert(ranking);
            minimal_score = score;
        } else if score == minimal_score {
            rankings.insert(ranking);
        }
    }
    debug!(score = minimal_score, winners = rankings.len(), "sweep finished");
    Ok(RuleOutcome { rankings, score: minimal_score })
}

/// The programmatic entry point: hold a majority graph, evaluate rules
/// against it.
///
/// Evaluation is pure; computing the same rule twice returns the same
/// outcome.
#[derive(Debug, Clone)]
pub struct VotingRules {
    graph: MajorityGraph,
}

impl VotingRules {
    pub fn from_profile(profile: &Profile) -> Self {
        VotingRules { graph: MajorityGraph::from_profile(profile) }
    }

    pub fn from_graph(graph: MajorityGraph) -> Self {
        VotingRules { graph }
    }

    pub fn graph(&self) -> &MajorityGraph {
        &self.graph
    }

    /// The rankings minimizing the number of inverted majority edges.
    pub fn compute_slater(&self) -> Result<RuleOutcome, RuleError> {
        Slater::compute(&self.graph).map(Slater::into_outcome)
    }

    /// The rankings minimizing the inverted majority margin mass.
    pub fn compute_kemeny(&self) -> Result<RuleOutcome, RuleError> {
        Kemeny::compute(&self.graph).map(Kemeny::into_outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ArbProfile;

    fn outcome_symbols(outcome: &RuleOutcome, profile: &Profile) -> Vec<String> {
        outcome
            .rankings
            .iter()
            .map(|r| r.to_symbols(profile.alternatives()).unwrap())
            .collect()
    }

    #[test]
    fn cyclic_profile_ties_the_rotations() {
        let profile = Profile::from_symbols(&["abc", "bca", "cab"]).unwrap();
        let rules = VotingRules::from_profile(&profile);
        // Every ranking has to invert at least one edge of the cycle; the
        // three rotations of it invert exactly one, the other three invert
        // two.
        let outcome = rules.compute_slater().unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome_symbols(&outcome, &profile), vec!["abc", "bca", "cab"]);
    }

    #[test]
    fn near_unanimous_profile_has_unique_winner() {
        let profile = Profile::from_symbols(&["abc", "abc", "bac"]).unwrap();
        let rules = VotingRules::from_profile(&profile);

        let slater = rules.compute_slater().unwrap();
        assert_eq!(outcome_symbols(&slater, &profile), vec!["abc"]);
        assert_eq!(slater.score, 0);

        let kemeny = rules.compute_kemeny().unwrap();
        assert_eq!(outcome_symbols(&kemeny, &profile), vec!["abc"]);
        assert_eq!(kemeny.score, 0);
    }

    #[test]
    fn tied_pair_yields_both_orders() {
        // x beats y and z; y and z are tied.
        let graph = MajorityGraph::from_edges(3, &[(0, 1), (0, 2)]).unwrap();
        let rules = VotingRules::from_graph(graph);
        let outcome = rules.compute_slater().unwrap();
        assert_eq!(outcome.score, 0);
        let winners: Vec<Vec<usize>> =
            outcome.rankings.iter().cloned().map(Ranking::get_inner).collect();
        assert_eq!(winners, vec![vec![0, 1, 2], vec![0, 2, 1]]);
    }

    #[test]
    fn empty_graph_is_reported_not_crashed() {
        let graph = MajorityGraph::from_edges(0, &[]).unwrap();
        let rules = VotingRules::from_graph(graph);
        assert_eq!(rules.compute_slater(), Err(RuleError::EmptyInput));
        assert_eq!(rules.compute_kemeny(), Err(RuleError::EmptyInput));
    }

    #[test]
    fn kemeny_follows_margins_where_slater_ties() {
        // A cycle with one heavy edge: Slater ties the three rotations, but
        // Kemeny drops the one inverting the margin-3 edge.
        let graph =
            MajorityGraph::from_weighted_edges(3, &[(0, 1, 3), (1, 2, 1), (2, 0, 1)]).unwrap();
        let rules = VotingRules::from_graph(graph);

        assert_eq!(rules.compute_slater().unwrap().rankings.len(), 3);

        let kemeny = rules.compute_kemeny().unwrap();
        assert_eq!(kemeny.score, 1);
        let winners: Vec<Vec<usize>> =
            kemeny.rankings.iter().cloned().map(Ranking::get_inner).collect();
        assert_eq!(winners, vec![vec![0, 1, 2], vec![2, 0, 1]]);
    }

    #[quickcheck]
    fn qc_winners_nonempty_and_minimal(profile: ArbProfile) -> bool {
        let ArbProfile(profile) = profile;
        let rules = VotingRules::from_profile(&profile);
        let outcome = rules.compute_slater().unwrap();
        let unweighted = rules.graph().unweighted();
        if outcome.rankings.is_empty() {
            return false;
        }
        all_rankings(profile.elements()).all(|ranking| {
            let score = distance::inversions(&unweighted, ranking.as_ref());
            if outcome.rankings.contains(&ranking) {
                score == outcome.score
            } else {
                score > outcome.score
            }
        })
    }

    #[quickcheck]
    fn qc_kemeny_winners_nonempty_and_minimal(profile: ArbProfile) -> bool {
        let ArbProfile(profile) = profile;
        let rules = VotingRules::from_profile(&profile);
        let outcome = rules.compute_kemeny().unwrap();
        if outcome.rankings.is_empty() {
            return false;
        }
        all_rankings(profile.elements()).all(|ranking| {
            let score = distance::inversions(rules.graph(), ranking.as_ref());
            if outcome.rankings.contains(&ranking) {
                score == outcome.score
            } else {
                score > outcome.score
            }
        })
    }

    #[quickcheck]
    fn qc_recomputation_is_idempotent(profile: ArbProfile) -> bool {
        let ArbProfile(profile) = profile;
        let rules = VotingRules::from_profile(&profile);
        rules.compute_slater() == rules.compute_slater()
            && rules.compute_kemeny() == rules.compute_kemeny()
    }
}
