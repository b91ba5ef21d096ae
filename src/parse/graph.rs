//! petgraph-based directed graph wrapper for a submitted pipeline.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Pipeline, PipelineEdge, PipelineNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub id: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

/// Per-request graph. Nodes are added in submission order, so `NodeIndex`
/// order matches the order of `Pipeline::nodes`.
pub struct PipelineGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
    /// Ids of edges left out because an endpoint is not a submitted node.
    pub unresolved_edges: Vec<String>,
}

impl PipelineGraph {
    pub fn from_pipeline(pipeline: &Pipeline) -> Self {
        Self::build(&pipeline.nodes, &pipeline.edges)
    }

    /// Build the graph. Never fails: an edge with an unknown endpoint is
    /// skipped and its id recorded in `unresolved_edges`.
    pub fn build(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_indices = HashMap::with_capacity(nodes.len());
        let mut unresolved_edges = Vec::new();

        for node in nodes {
            let id = node.id().to_string();
            let idx = graph.add_node(id.clone());
            node_indices.insert(id, idx);
        }

        for edge in edges {
            let source_idx = node_indices.get(&edge.source);
            let target_idx = node_indices.get(&edge.target);

            match (source_idx, target_idx) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(
                        s,
                        t,
                        EdgeLabel {
                            id: edge.id.clone(),
                            source_handle: edge.source_handle.clone(),
                            target_handle: edge.target_handle.clone(),
                        },
                    );
                }
                _ => unresolved_edges.push(edge.id.clone()),
            }
        }

        PipelineGraph {
            graph,
            node_indices,
            unresolved_edges,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Target ids of every outgoing edge, one entry per edge.
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        self.neighbors(node_id, Direction::Outgoing)
    }

    /// Source ids of every incoming edge, one entry per edge.
    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        self.neighbors(node_id, Direction::Incoming)
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.predecessors(node_id).len()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.successors(node_id).len()
    }

    fn neighbors(&self, node_id: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].as_str())
            .collect()
    }
}
