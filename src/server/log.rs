//! Injected logging capability for the request handler.
//!
//! The handler never calls the logger directly; it reports through whatever
//! `PipelineLog` the router state carries.

use crate::error::{Phase, PipelineError};

use super::response::PipelineResponse;

pub trait PipelineLog: Send + Sync {
    /// A request body decoded into a pipeline.
    fn received(&self, num_nodes: usize, num_edges: usize);

    fn analyzed(&self, response: &PipelineResponse);

    fn rejected(&self, error: &PipelineError);
}

/// Emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl PipelineLog for TracingLog {
    fn received(&self, num_nodes: usize, num_edges: usize) {
        tracing::info!(
            num_nodes,
            num_edges,
            "Received pipeline with {} nodes and {} edges",
            num_nodes,
            num_edges
        );
    }

    fn analyzed(&self, response: &PipelineResponse) {
        tracing::info!(
            is_dag = response.is_dag,
            num_nodes = response.num_nodes,
            num_edges = response.num_edges,
            "Pipeline analysis: {}",
            response.message
        );
        tracing::debug!(details = ?response.details, "Pipeline analysis details");
    }

    fn rejected(&self, error: &PipelineError) {
        match error.phase() {
            Phase::Internal => {
                tracing::error!(code = error.code(), "Error processing pipeline: {}", error)
            }
            _ => tracing::warn!(
                code = error.code(),
                phase = %error.phase(),
                "Rejected pipeline: {}",
                error
            ),
        }
    }
}
