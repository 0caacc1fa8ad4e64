//! Distances between rankings and majority graphs.

use std::collections::HashSet;

use rankings::RankingRef;

use crate::graph::MajorityGraph;

/// The Hamming distance between two edge sets: the size of their symmetric
/// difference, the pairs treated purely as set members.
///
/// Symmetric in its arguments, and zero exactly when the sets are equal.
pub fn hamming(a: &[(usize, usize)], b: &[(usize, usize)]) -> usize {
    let a: HashSet<(usize, usize)> = a.iter().copied().collect();
    let b: HashSet<(usize, usize)> = b.iter().copied().collect();
    a.symmetric_difference(&b).count()
}

/// The weighted inversion distance from `ranking` to `graph`: the total
/// majority margin the ranking inverts, i.e. the sum of `graph`'s weights
/// over every graph edge `(y, x)` whose reversal `(x, y)` the ranking
/// asserts.
///
/// On an unweighted graph this counts inverted edges; [`hamming`] against the
/// same graph differs from it only by an affine shift (twice the inversions
/// plus one per tied pair), so both orderings of rankings agree.
pub fn inversions(graph: &MajorityGraph, ranking: RankingRef) -> usize {
    debug_assert!(ranking.elements() == graph.elements());
    let order = ranking.as_slice();
    let n = order.len();
    let mut d = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            // The ranking puts order[i] before order[j]; an opposing graph
            // edge is inverted majority mass.
            d += graph.weight_or_zero(order[j], order[i]);
        }
    }
    d
}
