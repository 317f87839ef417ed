use std::collections::BTreeMap;
use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::codec::{self, triangular_index};
use crate::error::{EnumerationError, Result};

// =============== Labeled multigraph ===============

/// A labeled undirected multigraph, identified by its reduced vector.
///
/// The reduced vector is the only source of truth; `order` and `size` are
/// derived once at construction. Entry `triangular_index(row, col)` holds
/// the number of edges between `row` and `col` (self-loops on the diagonal).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledGraph {
    reduced: Vec<usize>,
    order: usize,
    size: usize,
}

impl LabeledGraph {
    pub fn from_reduced(reduced: Vec<usize>) -> Result<Self> {
        let order = codec::order_of(reduced.len())?;
        if order == 0 {
            return Err(EnumerationError::MalformedInput { len: 0 });
        }
        Ok(Self::with_order(reduced, order))
    }

    pub fn from_binary(bits: &[bool]) -> Result<Self> {
        Self::from_reduced(codec::decode(bits))
    }

    /// Caller guarantees `reduced.len() == reduced_len(order)`.
    pub(crate) fn with_order(reduced: Vec<usize>, order: usize) -> Self {
        debug_assert_eq!(reduced.len(), codec::reduced_len(order));
        let size = reduced.iter().sum();
        Self {
            reduced,
            order,
            size,
        }
    }

    pub fn reduced(&self) -> &[usize] {
        &self.reduced
    }

    pub fn into_reduced(self) -> Vec<usize> {
        self.reduced
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplicity of the unordered pair `{u, v}`.
    pub fn adjacency(&self, u: usize, v: usize) -> Result<usize> {
        if u >= self.order || v >= self.order {
            return Err(EnumerationError::InvalidArgument(format!(
                "vertex pair ({u}, {v}) out of range for order {}",
                self.order
            )));
        }
        Ok(self.multiplicity(u, v))
    }

    fn multiplicity(&self, u: usize, v: usize) -> usize {
        self.reduced[triangular_index(u.max(v), u.min(v))]
    }

    /// Relabels every vertex `x` as `p(x)` and returns the resulting reduced
    /// vector.
    pub fn apply_permutation(&self, p: &Permutation) -> Result<Vec<usize>> {
        if p.len() != self.order {
            return Err(EnumerationError::InvalidArgument(format!(
                "permutation of {} points applied to a graph of order {}",
                p.len(),
                self.order
            )));
        }
        Ok(self.relabel(p.as_slice()))
    }

    /// `mapping` must be a bijection of `0..order`.
    pub(crate) fn relabel(&self, mapping: &[usize]) -> Vec<usize> {
        let mut permuted = vec![0; self.reduced.len()];
        for row in 0..self.order {
            for col in 0..=row {
                let (a, b) = (mapping[row], mapping[col]);
                permuted[triangular_index(a.max(b), a.min(b))] =
                    self.reduced[triangular_index(row, col)];
            }
        }
        permuted
    }

    /// Value-count histogram of the reduced vector.
    pub fn degree_signature(&self) -> DegreeSignature {
        let mut counts = BTreeMap::new();
        for &multiplicity in &self.reduced {
            *counts.entry(multiplicity).or_insert(0) += 1;
        }
        DegreeSignature(counts.into_iter().collect())
    }

    /// Degree of every vertex; a self-loop counts twice.
    pub fn vertex_degrees(&self) -> Vec<usize> {
        (0..self.order)
            .map(|u| {
                (0..self.order)
                    .map(|v| {
                        let m = self.multiplicity(u, v);
                        if u == v { 2 * m } else { m }
                    })
                    .sum()
            })
            .collect()
    }

    /// Classification key for the chosen filter strength.
    pub fn signature(&self, filter: SignatureFilter) -> Signature {
        let degrees = match filter {
            SignatureFilter::Multiplicity => None,
            SignatureFilter::Degree => {
                let mut degrees = self.vertex_degrees();
                degrees.sort_unstable();
                Some(degrees)
            }
        };
        Signature {
            multiplicities: self.degree_signature(),
            degrees,
        }
    }

    pub fn is_loopless(&self) -> bool {
        (0..self.order).all(|u| self.multiplicity(u, u) == 0)
    }

    /// Undirected petgraph multigraph with one edge per unit of multiplicity.
    pub fn to_petgraph(&self) -> UnGraph<(), ()> {
        let mut graph = UnGraph::with_capacity(self.order, self.size);
        let nodes: Vec<NodeIndex> = (0..self.order).map(|_| graph.add_node(())).collect();
        for row in 0..self.order {
            for col in 0..=row {
                for _ in 0..self.multiplicity(row, col) {
                    graph.add_edge(nodes[row], nodes[col], ());
                }
            }
        }
        graph
    }
}

/// Lower-triangular matrix, one row per vertex, 4-wide cells.
impl fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.order {
            if row > 0 {
                writeln!(f)?;
            }
            let start = codec::reduced_len(row);
            for item in &self.reduced[start..start + row + 1] {
                write!(f, "{item:4}")?;
            }
        }
        Ok(())
    }
}

// =============== Permutations ===============

/// A bijection of `{0, .., n-1}`; vertex `i` is relabeled as `self[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn new(mapping: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; mapping.len()];
        for &image in &mapping {
            match seen.get_mut(image) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(EnumerationError::InvalidArgument(format!(
                        "{mapping:?} is not a permutation of 0..{}",
                        mapping.len()
                    )));
                }
            }
        }
        Ok(Self(mapping))
    }

    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// `next ∘ self`: relabel by `self` first, then by `next`.
    pub fn then(&self, next: &Permutation) -> Result<Permutation> {
        if next.len() != self.len() {
            return Err(EnumerationError::InvalidArgument(format!(
                "cannot compose permutations of {} and {} points",
                self.len(),
                next.len()
            )));
        }
        Ok(Permutation(self.0.iter().map(|&i| next.0[i]).collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

// =============== Signatures ===============

/// Multiset of edge multiplicities as sorted `(value, count)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DegreeSignature(Vec<(usize, usize)>);

impl DegreeSignature {
    pub fn counts(&self) -> &[(usize, usize)] {
        &self.0
    }
}

/// How much invariant information the classifier compares before falling
/// back to orbit membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignatureFilter {
    /// Multiset of multiplicities only.
    #[default]
    Multiplicity,
    /// Multiplicities plus the sorted vertex degree sequence.
    Degree,
}

/// Isomorphism invariant; unequal signatures rule out isomorphism.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    multiplicities: DegreeSignature,
    degrees: Option<Vec<usize>>,
}
