//! Request handlers: decode, validate, analyze, merge.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::analyze;
use crate::error::PipelineError;
use crate::parse::{self, Pipeline, PipelineGraph};
use crate::validate;

use super::AppState;
use super::log::PipelineLog;
use super::response::{HealthResponse, PipelineResponse};

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `POST /pipelines/parse`
pub async fn parse_pipeline(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PipelineResponse>, PipelineError> {
    let pipeline = parse::parse_slice(&body).inspect_err(|e| state.log.rejected(e))?;
    process_pipeline(&pipeline, state.log.as_ref()).map(Json)
}

/// Validate a decoded pipeline and merge both analyses into one response.
///
/// An empty node set short-circuits before edge validation.
pub fn process_pipeline(
    pipeline: &Pipeline,
    log: &dyn PipelineLog,
) -> Result<PipelineResponse, PipelineError> {
    log.received(pipeline.nodes.len(), pipeline.edges.len());

    if pipeline.nodes.is_empty() {
        let response = PipelineResponse::empty(pipeline.edges.len());
        log.analyzed(&response);
        return Ok(response);
    }

    let graph = PipelineGraph::from_pipeline(pipeline);
    if let Err(e) = validate::validate_graph(&graph) {
        log.rejected(&e);
        return Err(e);
    }

    let is_dag = analyze::is_acyclic_graph(&graph);
    let cycles = if is_dag {
        Vec::new()
    } else {
        analyze::find_cycles(&graph)
    };
    let analysis = analyze::analyze(&pipeline.nodes, &pipeline.edges);

    let response = PipelineResponse::from_analysis(pipeline, is_dag, analysis, cycles);
    log.analyzed(&response);
    Ok(response)
}
