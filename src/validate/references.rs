//! Edge endpoint resolution check (V001).

use crate::error::PipelineError;
use crate::parse::graph::PipelineGraph;

/// Reject the pipeline when any edge names a node that was not submitted.
/// All offending edge ids are reported, in submission order.
pub fn edges_reference_existing_nodes(graph: &PipelineGraph) -> Result<(), PipelineError> {
    if graph.unresolved_edges.is_empty() {
        return Ok(());
    }
    Err(PipelineError::DanglingEdgeReference {
        edge_ids: graph.unresolved_edges.clone(),
    })
}
