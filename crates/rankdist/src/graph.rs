use rankings::Profile;
use serde::{Deserialize, Serialize};

use crate::tarjan::tarjan;

/// Construction and lookup failures on majority graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint is outside `0..elements`.
    #[error("edge ({u}, {v}) out of range for {elements} nodes")]
    EdgeOutOfRange { u: usize, v: usize, elements: usize },
    /// Majority graphs have no self-loops.
    #[error("self-loop on node {0}")]
    SelfLoop(usize),
    /// Edge weights are positive margins.
    #[error("edge ({u}, {v}) has zero weight")]
    ZeroWeight { u: usize, v: usize },
    /// The same edge was supplied more than once.
    #[error("edge ({u}, {v}) supplied twice")]
    DuplicateEdge { u: usize, v: usize },
    /// Both orientations of a pair were supplied; a majority can only point
    /// one way.
    #[error("both orientations of pair {{{u}, {v}}} supplied")]
    DuplicateReverseEdge { u: usize, v: usize },
    /// Weight lookup on an absent edge.
    #[error("no edge ({u}, {v})")]
    EdgeNotFound { u: usize, v: usize },
}

/// A directed majority graph over the index space `0..elements`.
///
/// Stored as a flat `elements·elements` weight matrix; weight `0` means the
/// edge is absent. For any pair of nodes at most one direction carries an
/// edge — a pairwise tie leaves both directions absent. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorityGraph {
    // weights[u * elements + v] is the weight of edge u -> v, 0 if absent
    weights: Vec<usize>,
    elements: usize,
}

impl MajorityGraph {
    /// Build from an unweighted edge list; every edge gets weight 1.
    pub fn from_edges(elements: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let weighted: Vec<(usize, usize, usize)> =
            edges.iter().map(|&(u, v)| (u, v, 1)).collect();
        Self::from_weighted_edges(elements, &weighted)
    }

    /// Build from a weighted edge list with positive weights.
    pub fn from_weighted_edges(
        elements: usize,
        edges: &[(usize, usize, usize)],
    ) -> Result<Self, GraphError> {
        let mut graph = MajorityGraph { weights: vec![0; elements * elements], elements };
        for &(u, v, w) in edges {
            if u >= elements || v >= elements {
                return Err(GraphError::EdgeOutOfRange { u, v, elements });
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            if w == 0 {
                return Err(GraphError::ZeroWeight { u, v });
            }
            if graph.weights[u * elements + v] != 0 {
                return Err(GraphError::DuplicateEdge { u, v });
            }
            if graph.weights[v * elements + u] != 0 {
                return Err(GraphError::DuplicateReverseEdge { u, v });
            }
            graph.weights[u * elements + v] = w;
        }
        Ok(graph)
    }

    /// Derive the majority graph of a profile: for every pair the winning
    /// direction gets an edge weighted by the margin, ties get no edge.
    ///
    /// Deterministic, and independent of ballot order.
    pub fn from_profile(profile: &Profile) -> Self {
        let elements = profile.elements();
        let mut weights = vec![0; elements * elements];
        for x in 0..elements {
            for y in (x + 1)..elements {
                let margin = profile.margin(x, y);
                if margin > 0 {
                    weights[x * elements + y] = margin as usize;
                } else if margin < 0 {
                    weights[y * elements + x] = (-margin) as usize;
                }
            }
        }
        MajorityGraph { weights, elements }
    }

    pub fn elements(&self) -> usize {
        self.elements
    }

    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        0..self.elements
    }

    /// All edges as ordered `(u, v)` pairs, ascending by `u` then `v`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for u in 0..self.elements {
            for v in 0..self.elements {
                if self.weights[u * self.elements + v] != 0 {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.elements && v < self.elements && self.weights[u * self.elements + v] != 0
    }

    /// The weight of edge `u -> v`.
    pub fn weight(&self, u: usize, v: usize) -> Result<usize, GraphError> {
        if self.has_edge(u, v) {
            Ok(self.weights[u * self.elements + v])
        } else {
            Err(GraphError::EdgeNotFound { u, v })
        }
    }

    // Weight of `u -> v`, 0 when the edge is absent.
    pub(crate) fn weight_or_zero(&self, u: usize, v: usize) -> usize {
        debug_assert!(u < self.elements && v < self.elements);
        self.weights[u * self.elements + v]
    }

    /// The same edges with every weight collapsed to 1.
    pub fn unweighted(&self) -> MajorityGraph {
        MajorityGraph {
            weights: self.weights.iter().map(|&w| usize::from(w != 0)).collect(),
            elements: self.elements,
        }
    }

    /// All simple directed cycles, each rotated to start at its smallest
    /// node, sorted. Meant for analysis and presentation; the rule
    /// evaluators never look at cycles.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        // Every simple cycle lives inside one strongly connected component,
        // so the search can stay within components.
        let mut component_of = vec![0; self.elements];
        for (c, component) in tarjan(self.elements, &self.weights).into_iter().enumerate() {
            for v in component {
                component_of[v] = c;
            }
        }

        let mut cycles = Vec::new();
        let mut path = Vec::new();
        let mut on_path = vec![false; self.elements];
        for start in 0..self.elements {
            path.push(start);
            on_path[start] = true;
            self.cycles_from(start, start, &component_of, &mut path, &mut on_path, &mut cycles);
            on_path[start] = false;
            path.pop();
        }
        cycles.sort();
        cycles
    }

    // Depth-first search for simple cycles through `start`, visiting only
    // nodes larger than `start` in the same component, so each cycle is found
    // exactly once, rooted at its smallest node.
    fn cycles_from(
        &self,
        start: usize,
        v: usize,
        component_of: &[usize],
        path: &mut Vec<usize>,
        on_path: &mut Vec<bool>,
        cycles: &mut Vec<Vec<usize>>,
    ) {
        for w in 0..self.elements {
            if self.weights[v * self.elements + w] == 0 {
                continue;
            }
            if w == start && path.len() >= 2 {
                cycles.push(path.clone());
            } else if w > start && !on_path[w] && component_of[w] == component_of[start] {
                path.push(w);
                on_path[w] = true;
                self.cycles_from(start, w, component_of, path, on_path, cycles);
                on_path[w] = false;
                path.pop();
            }
        }
    }
}
