use std::sync::Mutex;

use pipeline_analyzer::error::PipelineError;
use pipeline_analyzer::parse::types::*;
use pipeline_analyzer::server::{PipelineLog, PipelineResponse};

// =============================================================================
// Pipeline builders
// =============================================================================

pub fn node(id: &str, node_type: &str) -> PipelineNode {
    PipelineNode {
        id: id.into(),
        node_type: node_type.into(),
        position: Position { x: 0.0, y: 0.0 },
        data: Attributes::new(),
    }
}

pub fn edge(id: &str, source: &str, target: &str) -> PipelineEdge {
    PipelineEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        source_handle: None,
        target_handle: None,
    }
}

/// Pipeline of `text` nodes with edges given as `(source, target)` pairs.
/// Edge ids are `e1`, `e2`, ... in order.
pub fn pipeline(node_ids: &[&str], links: &[(&str, &str)]) -> Pipeline {
    Pipeline {
        nodes: node_ids.iter().map(|id| node(id, "text")).collect(),
        edges: links
            .iter()
            .enumerate()
            .map(|(i, (s, t))| edge(&format!("e{}", i + 1), s, t))
            .collect(),
    }
}

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Log capabilities
// =============================================================================

/// Records every call as a short event string.
#[derive(Default)]
pub struct RecordingLog {
    events: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl PipelineLog for RecordingLog {
    fn received(&self, num_nodes: usize, num_edges: usize) {
        self.push(format!("received nodes={num_nodes} edges={num_edges}"));
    }

    fn analyzed(&self, response: &PipelineResponse) {
        self.push(format!("analyzed is_dag={}", response.is_dag));
    }

    fn rejected(&self, error: &PipelineError) {
        self.push(format!("rejected {}", error.code()));
    }
}

/// Fails while handling every request.
pub struct PanickingLog;

impl PipelineLog for PanickingLog {
    fn received(&self, _num_nodes: usize, _num_edges: usize) {
        panic!("log sink unavailable");
    }

    fn analyzed(&self, _response: &PipelineResponse) {}

    fn rejected(&self, _error: &PipelineError) {}
}
