//! Enumeration of undirected multigraphs up to isomorphism.
//!
//! Every labeled multigraph (self-loops and parallel edges allowed) with a
//! fixed number of vertices and edges is generated from a stars-and-bars
//! lattice, encoded as a reduced vector (lower triangle of the adjacency
//! matrix, diagonal included, row-major), and classified against the cached
//! orbits of the representatives found so far.

pub mod classifier;
pub mod codec;
pub mod error;
pub mod export;
pub mod graph;
pub mod lattice;
pub mod orbit;

pub use classifier::{Classification, ClassificationStats, Classifier, ClassifierOptions};
pub use error::{EnumerationError, Result};
pub use graph::{DegreeSignature, LabeledGraph, Permutation, Signature, SignatureFilter};
pub use lattice::{binomial, BinarySequences};
pub use orbit::{orbit, Orbit, Representative};

use tracing::debug;

/// Lattice parameters `(n, k)` for graphs with `vertices` vertices and
/// `edges` edges: `n = v(v+1)/2 + e - 1` slots holding `k = v(v+1)/2 - 1` bars.
fn lattice_shape(vertices: usize, edges: usize) -> Result<(usize, usize)> {
    if vertices < 1 {
        return Err(EnumerationError::InvalidArgument(format!(
            "vertex count must be at least 1, got {vertices}"
        )));
    }
    let too_large = || {
        EnumerationError::InvalidArgument(format!(
            "{vertices} vertices with {edges} edges exceeds the addressable lattice size"
        ))
    };
    let entries = codec::checked_reduced_len(vertices).ok_or_else(too_large)?;
    let n = (entries - 1).checked_add(edges).ok_or_else(too_large)?;
    Ok((n, entries - 1))
}

/// Number of labeled multigraphs with the given vertex and edge counts.
pub fn labeled_count(vertices: usize, edges: usize) -> Result<Option<u64>> {
    let (n, k) = lattice_shape(vertices, edges)?;
    Ok(binomial(n, k))
}

/// Every labeled multigraph with `vertices` vertices and `edges` edges,
/// generated lazily.
pub fn all_graphs(vertices: usize, edges: usize) -> Result<impl Iterator<Item = LabeledGraph>> {
    let (n, k) = lattice_shape(vertices, edges)?;
    debug!(vertices, edges, n, k, "enumerating stars-and-bars lattice");
    Ok(BinarySequences::new(n, k)?
        .map(move |bits| LabeledGraph::with_order(codec::decode(&bits), vertices)))
}

/// Classifies all labeled multigraphs with the given counts.
pub fn classify_graphs(
    vertices: usize,
    edges: usize,
    classifier: &Classifier,
) -> Result<Classification> {
    Ok(classifier.classify(all_graphs(vertices, edges)?))
}

/// One reduced vector per isomorphism class, in discovery order.
pub fn enumerate_non_isomorphic_graphs(
    vertices: usize,
    edges: usize,
    verbose: bool,
) -> Result<Vec<Vec<usize>>> {
    let classifier = Classifier::new(ClassifierOptions {
        verbose,
        ..ClassifierOptions::default()
    });
    let classification = classify_graphs(vertices, edges, &classifier)?;
    Ok(classification
        .representatives
        .into_iter()
        .map(|rep| rep.into_graph().into_reduced())
        .collect())
}
