//! Request-level validation phase.
//!
//! Runs between graph construction and analysis. A pipeline that fails here
//! never reaches the analysis core.

pub mod references;

use crate::error::PipelineError;
use crate::parse::graph::PipelineGraph;

/// Validate a built pipeline graph.
pub fn validate_graph(graph: &PipelineGraph) -> Result<(), PipelineError> {
    references::edges_reference_existing_nodes(graph)
}
