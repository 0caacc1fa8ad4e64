use super::{closest_to_graph, RankingRule, RuleError, RuleOutcome};
use crate::graph::MajorityGraph;

/// The Kemeny rule: winners minimize the total majority margin they invert,
/// so a wide margin weighs more than a narrow one.
pub struct Kemeny {
    outcome: RuleOutcome,
}

impl RankingRule for Kemeny {
    fn compute(graph: &MajorityGraph) -> Result<Self, RuleError> {
        let outcome = closest_to_graph(graph)?;
        Ok(Kemeny { outcome })
    }

    fn outcome(&self) -> &RuleOutcome {
        &self.outcome
    }

    fn into_outcome(self) -> RuleOutcome {
        self.outcome
    }
}
