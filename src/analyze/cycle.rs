//! Cycle detection by Kahn's topological peeling.

use std::collections::VecDeque;

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::visit::EdgeRef;

use crate::parse::graph::PipelineGraph;
use crate::parse::types::{PipelineEdge, PipelineNode};

/// Returns `true` when the graph formed by `nodes` and `edges` has no
/// directed cycle. Edges naming an absent node are ignored. An empty node
/// set is acyclic.
pub fn is_acyclic(nodes: &[PipelineNode], edges: &[PipelineEdge]) -> bool {
    if nodes.is_empty() {
        return true;
    }
    is_acyclic_graph(&PipelineGraph::build(nodes, edges))
}

/// Acyclic iff the peeling consumes every node.
pub fn is_acyclic_graph(graph: &PipelineGraph) -> bool {
    topological_order(graph).len() == graph.node_count()
}

/// Node ids in the order Kahn's algorithm removes them.
///
/// The queue is seeded with zero in-degree nodes in submission order. Nodes
/// on a cycle, and everything downstream of one, never reach in-degree zero
/// and are missing from the result.
pub fn topological_order(graph: &PipelineGraph) -> Vec<&str> {
    let g = &graph.graph;

    let mut in_degree = vec![0usize; g.node_count()];
    for edge in g.edge_references() {
        in_degree[edge.target().index()] += 1;
    }

    let mut queue: VecDeque<_> = g
        .node_indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(g.node_count());
    while let Some(current) = queue.pop_front() {
        order.push(g[current].as_str());

        // Parallel edges yield the neighbour once per edge, matching the
        // per-edge in-degree count above.
        for neighbor in g.neighbors_directed(current, Direction::Outgoing) {
            let degree = &mut in_degree[neighbor.index()];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// Groups of node ids that lie on at least one cycle: strongly connected
/// components with more than one node, plus single nodes with a self-loop.
/// Sorted within and across groups.
pub fn find_cycles(graph: &PipelineGraph) -> Vec<Vec<String>> {
    let g = &graph.graph;

    let mut cycles: Vec<Vec<String>> = tarjan_scc(g)
        .into_iter()
        .filter(|component| component.len() > 1 || g.contains_edge(component[0], component[0]))
        .map(|component| {
            let mut ids: Vec<String> = component.into_iter().map(|idx| g[idx].clone()).collect();
            ids.sort();
            ids
        })
        .collect();

    cycles.sort();
    cycles
}
