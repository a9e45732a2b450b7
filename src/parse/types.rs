//! Rust types mirroring the editor's workflow snapshot JSON.
//!
//! These types are the serde target for the node/edge arrays and the
//! metadata registry the front end sends for validation. The core never
//! mutates them; every validation pass works on a fresh snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// SNAPSHOT
// =============================================================================

/// One validation request worth of editor state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    pub workflow_id: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Registry keyed by node `type`, supplied by the external metadata store.
    #[serde(default)]
    pub metadata: HashMap<String, NodeMetadata>,
}

// =============================================================================
// NODES & EDGES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Property values declared by the node type's static metadata.
    #[serde(default)]
    pub static_properties: HashMap<String, serde_json::Value>,
    /// User-added property values with no static metadata entry.
    #[serde(default)]
    pub dynamic_properties: HashMap<String, serde_json::Value>,
    /// User-added outputs with no static metadata entry.
    #[serde(default)]
    pub dynamic_outputs: HashMap<String, TypeDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
    /// Control edges carry execution order, not data.
    #[serde(default)]
    pub is_control_edge: bool,
}

// =============================================================================
// METADATA REGISTRY
// =============================================================================

/// Static declaration of a node type's handles and behavior flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    pub node_type: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub outputs: Vec<OutputSlot>,
    /// Accepts arbitrary named inputs (any target handle name is valid).
    #[serde(default)]
    pub is_dynamic: bool,
    /// Outputs are produced incrementally rather than as a single value.
    #[serde(default)]
    pub is_streaming_output: bool,
}

/// A named input handle on a node type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

/// A named output handle on a node type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSlot {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

// =============================================================================
// TYPE DESCRIPTORS
// =============================================================================

/// Structural description of the value type flowing through a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub type_args: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Universal wildcard; connectable to anything on either side.
    pub const ANY: &'static str = "any";

    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            optional: false,
            type_args: Vec::new(),
        }
    }

    pub fn any() -> Self {
        Self::named(Self::ANY)
    }

    pub fn is_any(&self) -> bool {
        self.name == Self::ANY
    }
}
