#![allow(dead_code)]

use std::collections::HashMap;

use validator::parse::types::{
    Edge, Node, NodeMetadata, OutputSlot, Property, TypeDescriptor, WorkflowSnapshot,
};

// =============================================================================
// Snapshot builders
// =============================================================================

pub fn node(id: &str, node_type: &str) -> Node {
    Node {
        id: id.into(),
        node_type: node_type.into(),
        parent_id: None,
        static_properties: HashMap::new(),
        dynamic_properties: HashMap::new(),
        dynamic_outputs: HashMap::new(),
    }
}

/// Edge with both handles set.
pub fn edge(id: &str, source: &str, source_handle: &str, target: &str, target_handle: &str) -> Edge {
    Edge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        source_handle: Some(source_handle.into()),
        target_handle: Some(target_handle.into()),
        is_control_edge: false,
    }
}

/// Edge with no handle names, as dropped connections arrive from the editor.
pub fn bare_edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        source_handle: None,
        target_handle: None,
        is_control_edge: false,
    }
}

pub fn ty(name: &str) -> TypeDescriptor {
    TypeDescriptor::named(name)
}

/// Metadata entry from `(name, type)` pairs for inputs and outputs.
pub fn meta(node_type: &str, inputs: &[(&str, &str)], outputs: &[(&str, &str)]) -> NodeMetadata {
    NodeMetadata {
        node_type: node_type.into(),
        properties: inputs
            .iter()
            .map(|(name, t)| Property {
                name: (*name).into(),
                ty: ty(t),
            })
            .collect(),
        outputs: outputs
            .iter()
            .map(|(name, t)| OutputSlot {
                name: (*name).into(),
                ty: ty(t),
            })
            .collect(),
        is_dynamic: false,
        is_streaming_output: false,
    }
}

/// Standard reroute metadata: one `any` input, one `any` output.
pub fn reroute_meta() -> NodeMetadata {
    meta("reroute", &[("input", "any")], &[("output", "any")])
}

pub fn meta_map(entries: Vec<NodeMetadata>) -> HashMap<String, NodeMetadata> {
    entries
        .into_iter()
        .map(|m| (m.node_type.clone(), m))
        .collect()
}

pub fn snapshot(
    workflow_id: &str,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    metadata: HashMap<String, NodeMetadata>,
) -> WorkflowSnapshot {
    WorkflowSnapshot {
        workflow_id: workflow_id.into(),
        nodes,
        edges,
        metadata,
    }
}
