//! Rust types mirroring the pipeline editor's submit payload.
//!
//! These types are the serde target for the frontend `{nodes, edges}` JSON.
//! Field names follow the editor's wire format (`sourceHandle`, `type`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque, order-preserving node attributes. Never inspected by analysis.
pub type Attributes = Map<String, Value>;

// =============================================================================
// TOP-LEVEL PIPELINE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<PipelineNode>,
    pub edges: Vec<PipelineEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// NODE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: Attributes,
}

impl PipelineNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }
}
