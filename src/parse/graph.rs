//! petgraph-based snapshot view over the editor's node and edge lists.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{Edge, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    pub edge_id: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

/// Immutable per-pass view: id → node lookup plus a directed graph over
/// every edge whose endpoints both exist. Edges with a dangling endpoint
/// are left out of the graph; the validator reports them separately.
pub struct GraphModel<'a> {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<&'a str, NodeIndex>,
    nodes_by_id: HashMap<&'a str, &'a Node>,
}

impl<'a> GraphModel<'a> {
    /// Build the indices in one pass. Never fails; absent ids simply
    /// resolve to `None` on lookup.
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut nodes_by_id = HashMap::new();

        for node in nodes {
            let id = node.id.as_str();
            nodes_by_id.insert(id, node);
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(id, idx);
        }

        for edge in edges {
            let source_idx = node_indices.get(edge.source.as_str());
            let target_idx = node_indices.get(edge.target.as_str());
            if let (Some(&s), Some(&t)) = (source_idx, target_idx) {
                graph.add_edge(
                    s,
                    t,
                    EdgeLabel {
                        edge_id: edge.id.clone(),
                        source_handle: edge.source_handle.clone(),
                        target_handle: edge.target_handle.clone(),
                    },
                );
            }
        }

        GraphModel {
            graph,
            node_indices,
            nodes_by_id,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes_by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes_by_id.contains_key(id)
    }

    /// Outgoing edges of `node_id` as `(target id, label)` pairs.
    pub fn outgoing_edges(&self, node_id: &str) -> Vec<(&str, &EdgeLabel)> {
        self.directed_edges(node_id, Direction::Outgoing)
    }

    /// Incoming edges of `node_id` as `(source id, label)` pairs.
    pub fn incoming_edges(&self, node_id: &str) -> Vec<(&str, &EdgeLabel)> {
        self.directed_edges(node_id, Direction::Incoming)
    }

    fn directed_edges(&self, node_id: &str, dir: Direction) -> Vec<(&str, &EdgeLabel)> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = match dir {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (self.graph[other].as_str(), e.weight())
            })
            .collect()
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.incoming_edges(node_id).len()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.outgoing_edges(node_id).len()
    }

    /// Whether the already-connected portion of the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}
