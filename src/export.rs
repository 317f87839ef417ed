//! JSON persistence for classification results.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EnumerationError, Result};
use crate::graph::LabeledGraph;
use crate::orbit::Representative;

/// On-disk form of one representative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableGraph {
    pub order: usize,
    pub size: usize,
    pub reduced: Vec<usize>,
    pub orbit_size: usize,
    /// One 1-indexed endpoint pair per unit of multiplicity.
    pub edges: Vec<(usize, usize)>,
}

impl From<&Representative> for SerializableGraph {
    fn from(rep: &Representative) -> Self {
        let graph = rep.graph();
        let edges = graph
            .to_petgraph()
            .edge_references()
            // Shift to 1-indexed for output
            .map(|e| (e.source().index() + 1, e.target().index() + 1))
            .collect();
        Self {
            order: graph.order(),
            size: graph.size(),
            reduced: graph.reduced().to_vec(),
            orbit_size: rep.orbit().len(),
            edges,
        }
    }
}

impl TryFrom<SerializableGraph> for LabeledGraph {
    type Error = EnumerationError;

    fn try_from(record: SerializableGraph) -> Result<Self> {
        let graph = LabeledGraph::from_reduced(record.reduced)?;
        if graph.order() != record.order || graph.size() != record.size {
            return Err(EnumerationError::InvalidArgument(format!(
                "record claims order {} and size {}, reduced vector has {} and {}",
                record.order,
                record.size,
                graph.order(),
                graph.size()
            )));
        }
        Ok(graph)
    }
}

pub fn save_representatives(path: impl AsRef<Path>, reps: &[Representative]) -> Result<()> {
    let path = path.as_ref();
    info!(count = reps.len(), path = %path.display(), "saving representatives");
    let records: Vec<SerializableGraph> = reps.iter().map(SerializableGraph::from).collect();
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

pub fn load_graphs(path: impl AsRef<Path>) -> Result<Vec<LabeledGraph>> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading graphs");
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<SerializableGraph> = serde_json::from_reader(reader)?;
    records.into_iter().map(LabeledGraph::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lists_every_parallel_edge() {
        let rep = LabeledGraph::from_reduced(vec![1, 2, 0]).unwrap().promote();
        let record = SerializableGraph::from(&rep);
        assert_eq!(record.order, 2);
        assert_eq!(record.size, 3);
        assert_eq!(record.orbit_size, 2);
        assert_eq!(record.edges, vec![(1, 1), (2, 1), (2, 1)]);
    }

    #[test]
    fn inconsistent_record_is_rejected() {
        let record = SerializableGraph {
            order: 2,
            size: 5,
            reduced: vec![0, 1, 0],
            orbit_size: 1,
            edges: vec![],
        };
        assert!(LabeledGraph::try_from(record).is_err());
    }
}
