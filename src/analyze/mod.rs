//! Analysis phase: acyclicity and structural metadata.
//!
//! Both operations are pure and total. They build their own working state
//! per call and keep nothing between calls.

pub mod cycle;
pub mod structure;

pub use cycle::{find_cycles, is_acyclic, is_acyclic_graph, topological_order};
pub use structure::{AnalysisResult, analyze};
