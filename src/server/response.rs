//! Wire types returned to the pipeline editor.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::analyze::AnalysisResult;
use crate::error::{Phase, PipelineError};
use crate::parse::types::Pipeline;

pub const EMPTY_PIPELINE_MESSAGE: &str = "Empty pipeline - no nodes provided";
pub const EMPTY_PIPELINE_WARNING: &str = "Pipeline contains no nodes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse {
            message: "Pipeline analyzer is running".into(),
            status: "healthy".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
    pub message: String,
    pub details: ResponseDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseDetails {
    Analysis(AnalysisDetails),
    Warning { warning: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub node_types: BTreeMap<String, usize>,
    pub isolated_nodes: Vec<String>,
    pub entry_points: Vec<String>,
    pub exit_points: Vec<String>,
    pub cycles: Vec<Vec<String>>,
    pub total_connections: usize,
}

impl PipelineResponse {
    /// Response for a pipeline without nodes: trivially acyclic, with a warning.
    pub fn empty(num_edges: usize) -> Self {
        PipelineResponse {
            num_nodes: 0,
            num_edges,
            is_dag: true,
            message: EMPTY_PIPELINE_MESSAGE.into(),
            details: ResponseDetails::Warning {
                warning: EMPTY_PIPELINE_WARNING.into(),
            },
        }
    }

    pub fn from_analysis(
        pipeline: &Pipeline,
        is_dag: bool,
        analysis: AnalysisResult,
        cycles: Vec<Vec<String>>,
    ) -> Self {
        let message = summary_message(is_dag, analysis.isolated_nodes.len());
        PipelineResponse {
            num_nodes: pipeline.nodes.len(),
            num_edges: pipeline.edges.len(),
            is_dag,
            message,
            details: ResponseDetails::Analysis(AnalysisDetails {
                node_types: analysis.node_types,
                isolated_nodes: analysis.isolated_nodes,
                entry_points: analysis.entry_points.into_iter().collect(),
                exit_points: analysis.exit_points.into_iter().collect(),
                cycles,
                total_connections: pipeline.edges.len(),
            }),
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisDetails> {
        match &self.details {
            ResponseDetails::Analysis(details) => Some(details),
            ResponseDetails::Warning { .. } => None,
        }
    }
}

/// Human-readable summary, fragments joined by `" | "`.
pub fn summary_message(is_dag: bool, isolated_count: usize) -> String {
    let mut parts = vec![if is_dag {
        "Valid DAG structure".to_string()
    } else {
        "Contains cycles - not a DAG".to_string()
    }];

    match isolated_count {
        0 => {}
        1 => parts.push("1 isolated node".to_string()),
        n => parts.push(format!("{n} isolated nodes")),
    }

    parts.join(" | ")
}

// ---------------------------------------------------------------------------
// Error responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
    pub phase: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_ids: Vec<String>,
}

impl From<&PipelineError> for ErrorBody {
    fn from(e: &PipelineError) -> Self {
        ErrorBody {
            detail: e.to_string(),
            code: e.code().into(),
            phase: e.phase().to_string(),
            edge_ids: e.edge_ids().to_vec(),
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = match self.phase() {
            Phase::Parse => StatusCode::UNPROCESSABLE_ENTITY,
            Phase::Validate => StatusCode::BAD_REQUEST,
            Phase::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
