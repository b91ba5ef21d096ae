//! Parse phase: JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::PipelineGraph;
pub use types::*;

use crate::error::PipelineError;

/// Deserialize a pipeline JSON string into a `Pipeline` struct.
pub fn parse(json: &str) -> Result<Pipeline, PipelineError> {
    parse_slice(json.as_bytes())
}

/// Deserialize a raw request body. Invalid UTF-8 is reported like any other
/// decoding failure.
pub fn parse_slice(body: &[u8]) -> Result<Pipeline, PipelineError> {
    serde_json::from_slice::<Pipeline>(body)
        .map_err(|e| PipelineError::MalformedRequest(e.to_string()))
}

/// Parse JSON and build the graph in one step.
pub fn parse_and_build(json: &str) -> Result<(Pipeline, PipelineGraph), PipelineError> {
    let pipeline = parse(json)?;
    let graph = PipelineGraph::from_pipeline(&pipeline);
    Ok((pipeline, graph))
}
