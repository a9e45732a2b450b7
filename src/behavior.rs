//! Node-kind dispatch table built from the metadata registry.
//!
//! The node `type` string is only ever inspected here. Everything else in
//! the crate asks the table for a [`NodeBehavior`] instead of comparing
//! strings, so new node types supplied through metadata keep working
//! without code changes.

use std::collections::HashMap;

use crate::parse::types::{Node, NodeMetadata};

/// Reserved node type for pass-through indirection nodes.
pub const REROUTE_TYPE: &str = "reroute";
/// The single input handle a reroute node exposes.
pub const REROUTE_INPUT: &str = "input";
/// The single output handle a reroute node exposes.
pub const REROUTE_OUTPUT: &str = "output";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Pass-through node; its output type is whatever feeds its input.
    Reroute,
    /// Any other node; behavior comes from its metadata entry.
    Standard,
}

#[derive(Debug, Clone, Copy)]
pub struct NodeBehavior {
    pub kind: NodeKind,
    /// Metadata `isDynamic`: any input handle name is implicitly valid.
    pub accepts_any_input: bool,
    /// Metadata `isStreamingOutput`: values arrive incrementally.
    pub streaming_output: bool,
}

impl NodeBehavior {
    const STANDARD: NodeBehavior = NodeBehavior {
        kind: NodeKind::Standard,
        accepts_any_input: false,
        streaming_output: false,
    };
}

/// Per-pass lookup from node type to behavior flags.
pub struct BehaviorTable<'a> {
    by_type: HashMap<&'a str, NodeBehavior>,
}

impl<'a> BehaviorTable<'a> {
    pub fn build(nodes: &'a [Node], metadata: &'a HashMap<String, NodeMetadata>) -> Self {
        let mut by_type = HashMap::new();
        for node in nodes {
            let ty = node.node_type.as_str();
            if by_type.contains_key(ty) {
                continue;
            }
            let meta = metadata.get(ty);
            by_type.insert(
                ty,
                NodeBehavior {
                    kind: if ty == REROUTE_TYPE {
                        NodeKind::Reroute
                    } else {
                        NodeKind::Standard
                    },
                    accepts_any_input: meta.is_some_and(|m| m.is_dynamic),
                    streaming_output: meta.is_some_and(|m| m.is_streaming_output),
                },
            );
        }
        BehaviorTable { by_type }
    }

    /// Behavior for a node; unknown types fall back to standard flags.
    pub fn of(&self, node: &Node) -> NodeBehavior {
        self.by_type
            .get(node.node_type.as_str())
            .copied()
            .unwrap_or(NodeBehavior::STANDARD)
    }

    pub fn is_reroute(&self, node: &Node) -> bool {
        self.of(node).kind == NodeKind::Reroute
    }
}
