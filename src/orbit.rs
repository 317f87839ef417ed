//! Isomorphism orbits and promoted class representatives.
//!
//! A candidate graph only pays for its orbit (`order!` relabelings) once the
//! classifier promotes it; [`LabeledGraph::promote`] is the single place an
//! orbit gets built.

use std::collections::HashSet;

use itertools::Itertools;

use crate::graph::LabeledGraph;

/// Every reduced vector reachable from one graph by relabeling vertices.
#[derive(Debug, Clone)]
pub struct Orbit(HashSet<Vec<usize>>);

impl Orbit {
    pub fn contains(&self, reduced: &[usize]) -> bool {
        self.0.contains(reduced)
    }

    /// Number of distinct labeled graphs in the orbit.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.0.iter().map(Vec::as_slice)
    }
}

/// Applies all `order!` permutations of `graph`'s vertices.
pub fn orbit(graph: &LabeledGraph) -> Orbit {
    let order = graph.order();
    Orbit(
        (0..order)
            .permutations(order)
            .map(|p| graph.relabel(&p))
            .collect(),
    )
}

/// A graph chosen to stand for its isomorphism class, with its orbit cached
/// for membership tests against later candidates.
#[derive(Debug, Clone)]
pub struct Representative {
    graph: LabeledGraph,
    orbit: Orbit,
}

impl Representative {
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// True when `candidate` is a relabeling of this representative.
    pub fn is_isomorphic(&self, candidate: &LabeledGraph) -> bool {
        self.orbit.contains(candidate.reduced())
    }

    pub fn into_graph(self) -> LabeledGraph {
        self.graph
    }
}

impl LabeledGraph {
    pub fn promote(self) -> Representative {
        let orbit = orbit(&self);
        Representative { graph: self, orbit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_contains_self() {
        let g = LabeledGraph::from_reduced(vec![1, 2, 0, 0, 1, 3]).unwrap();
        assert!(orbit(&g).contains(g.reduced()));
    }

    #[test]
    fn single_vertex_orbit_is_trivial() {
        let g = LabeledGraph::from_reduced(vec![4]).unwrap();
        let o = orbit(&g);
        assert_eq!(o.len(), 1);
        assert_eq!(o.iter().next(), Some(&[4][..]));
    }

    #[test]
    fn orbit_sizes_follow_automorphisms() {
        // path on 3 vertices: 3!/2 = 3 labelings, one per choice of centre
        let path = LabeledGraph::from_reduced(vec![0, 1, 0, 0, 1, 0]).unwrap();
        let o = orbit(&path);
        assert_eq!(o.len(), 3);
        assert!(o.contains(&[0, 1, 0, 1, 0, 0]));
        assert!(o.contains(&[0, 0, 0, 1, 1, 0]));

        // empty graph is fixed by everything
        let empty = LabeledGraph::from_reduced(vec![0; 6]).unwrap();
        assert_eq!(orbit(&empty).len(), 1);

        // three distinct multiplicities on a triangle: no symmetry left
        let rigid = LabeledGraph::from_reduced(vec![0, 1, 0, 2, 3, 0]).unwrap();
        assert_eq!(orbit(&rigid).len(), 6);
    }

    #[test]
    fn promotion_caches_orbit() {
        let g = LabeledGraph::from_reduced(vec![1, 0, 0]).unwrap();
        let rep = g.clone().promote();
        assert_eq!(rep.graph(), &g);
        assert_eq!(rep.orbit().len(), 2);
        assert!(rep.is_isomorphic(&LabeledGraph::from_reduced(vec![0, 0, 1]).unwrap()));
        assert!(!rep.is_isomorphic(&LabeledGraph::from_reduced(vec![0, 1, 0]).unwrap()));
    }
}
