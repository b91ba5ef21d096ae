//! Structural metadata derived from edge endpoints.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::parse::types::{PipelineEdge, PipelineNode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Node count per type label.
    pub node_types: BTreeMap<String, usize>,
    /// Nodes with no incident edge, in submission order.
    pub isolated_nodes: Vec<String>,
    /// Ids that appear as an edge source but never as a target.
    pub entry_points: BTreeSet<String>,
    /// Ids that appear as an edge target but never as a source.
    pub exit_points: BTreeSet<String>,
}

pub fn analyze(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> AnalysisResult {
    let mut node_types = BTreeMap::new();
    for node in nodes {
        *node_types.entry(node.node_type().to_string()).or_insert(0) += 1;
    }

    let sources: BTreeSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
    let targets: BTreeSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    let connected: BTreeSet<&str> = sources.union(&targets).copied().collect();

    let isolated_nodes = nodes
        .iter()
        .filter(|n| !connected.contains(n.id()))
        .map(|n| n.id().to_string())
        .collect();

    let entry_points = sources.difference(&targets).map(|id| id.to_string()).collect();
    let exit_points = targets.difference(&sources).map(|id| id.to_string()).collect();

    AnalysisResult {
        node_types,
        isolated_nodes,
        entry_points,
        exit_points,
    }
}
