use super::{closest_to_graph, RankingRule, RuleError, RuleOutcome};
use crate::graph::MajorityGraph;

/// The Slater rule: every majority edge counts the same, whatever its
/// margin. Winners minimize the number of majority edges they invert.
pub struct Slater {
    outcome: RuleOutcome,
}

impl RankingRule for Slater {
    fn compute(graph: &MajorityGraph) -> Result<Self, RuleError> {
        let outcome = closest_to_graph(&graph.unweighted())?;
        Ok(Slater { outcome })
    }

    fn outcome(&self) -> &RuleOutcome {
        &self.outcome
    }

    fn into_outcome(self) -> RuleOutcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_do_not_matter() {
        // The heavy margin on 2 -> 0 cannot outvote two unit edges once
        // weights are flattened.
        let heavy =
            MajorityGraph::from_weighted_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 100)]).unwrap();
        let flat = MajorityGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let a = Slater::compute(&heavy).unwrap();
        let b = Slater::compute(&flat).unwrap();
        assert_eq!(a.outcome(), b.outcome());
    }
}
