//! Effective type resolution through chains of reroute nodes.
//!
//! A reroute node forwards whatever feeds its single input, so the type
//! of an edge leaving one is found by walking backwards until something
//! that is not a reroute output is reached.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::behavior::{BehaviorTable, NodeKind, REROUTE_INPUT, REROUTE_OUTPUT};
use crate::parse::graph::GraphModel;
use crate::parse::types::{NodeMetadata, TypeDescriptor};
use crate::typing::{display_color, display_label};

/// The type flowing out of a source handle, with the display fields the
/// editor uses for wire coloring and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedType {
    pub slug: String,
    pub color: &'static str,
    pub label: String,
    #[serde(rename = "type")]
    pub descriptor: TypeDescriptor,
}

impl ResolvedType {
    pub fn from_descriptor(descriptor: TypeDescriptor) -> Self {
        let slug = descriptor.name.clone();
        ResolvedType {
            color: display_color(&slug),
            label: display_label(&slug),
            slug,
            descriptor,
        }
    }

    /// Neutral wildcard, used for dead ends and cyclic chains.
    pub fn any() -> Self {
        Self::from_descriptor(TypeDescriptor::any())
    }
}

/// Resolve the type that effectively flows out of `(node_id, handle)`.
///
/// Reroute output handles are followed backwards through the unique edge
/// feeding the reroute's input, repeating until a non-reroute output, a
/// dead end (no incoming edge), or an already-visited node is reached.
/// The visited set makes a reroute chain that feeds back into itself
/// resolve to `any` instead of looping.
pub fn resolve_effective_source_type(
    model: &GraphModel<'_>,
    behaviors: &BehaviorTable<'_>,
    metadata: &HashMap<String, NodeMetadata>,
    node_id: &str,
    handle: &str,
) -> ResolvedType {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current_id = node_id.to_string();
    let mut current_handle = Some(handle.to_string());

    loop {
        let Some(node) = model.node(&current_id) else {
            return ResolvedType::any();
        };
        if !visited.insert(node.id.as_str()) {
            // Cyclic reroute chain; neutral type keeps resolution total.
            return ResolvedType::any();
        }

        let is_reroute_output = behaviors.of(node).kind == NodeKind::Reroute
            && current_handle.as_deref() == Some(REROUTE_OUTPUT);
        if is_reroute_output {
            let feeder = model
                .incoming_edges(&node.id)
                .into_iter()
                .find(|(_, label)| label.target_handle.as_deref() == Some(REROUTE_INPUT));
            match feeder {
                Some((source_id, label)) => {
                    current_id = source_id.to_string();
                    current_handle = label.source_handle.clone();
                    continue;
                }
                // Dead end: nothing feeds the reroute yet.
                None => return ResolvedType::any(),
            }
        }

        let Some(handle_name) = current_handle.as_deref() else {
            return ResolvedType::any();
        };
        let meta = metadata.get(&node.node_type);
        return match super::find_output_handle(node, handle_name, meta) {
            Some(output) => ResolvedType::from_descriptor(output.ty().clone()),
            None => ResolvedType::any(),
        };
    }
}
