//! Unified error type for request decoding, validation and host failures.
//!
//! The analysis core never produces these: both of its operations are total.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
    Internal,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
            Phase::Internal => write!(f, "Internal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The payload could not be decoded into a pipeline.
    #[error("Failed to parse pipeline JSON: {0}")]
    MalformedRequest(String),

    /// One or more edges name a node id that was not submitted.
    #[error("Invalid edges reference non-existent nodes: {edge_ids:?}")]
    DanglingEdgeReference { edge_ids: Vec<String> },

    #[error("Internal server error: {0}")]
    InternalFailure(String),
}

impl PipelineError {
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::MalformedRequest(_) => "P001",
            PipelineError::DanglingEdgeReference { .. } => "V001",
            PipelineError::InternalFailure(_) => "I001",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            PipelineError::MalformedRequest(_) => Phase::Parse,
            PipelineError::DanglingEdgeReference { .. } => Phase::Validate,
            PipelineError::InternalFailure(_) => Phase::Internal,
        }
    }

    /// Offending edge ids, empty for every variant but `DanglingEdgeReference`.
    pub fn edge_ids(&self) -> &[String] {
        match self {
            PipelineError::DanglingEdgeReference { edge_ids } => edge_ids,
            _ => &[],
        }
    }
}
