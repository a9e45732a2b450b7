//! Parse phase: editor JSON → snapshot types + graph construction.

pub mod graph;
pub mod types;

pub use graph::GraphModel;
pub use types::*;

use crate::error::ParseError;

/// Deserialize a workflow snapshot JSON string.
pub fn parse(json: &str) -> Result<WorkflowSnapshot, ParseError> {
    Ok(serde_json::from_str::<WorkflowSnapshot>(json)?)
}
