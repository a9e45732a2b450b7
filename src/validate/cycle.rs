//! Candidate-edge cycle detection.

use std::collections::{HashMap, HashSet};

use crate::parse::types::Edge;

/// Whether adding `source_id -> target_id` to `edges` would close a
/// directed cycle.
///
/// A self-loop is trivially a cycle; empty ids never are. Otherwise an
/// iterative DFS from `target_id` looks for a path back to `source_id`.
/// The visited set guarantees termination even when `edges` already
/// contains cycles or self-loops. O(V + E) per call, cheap enough to run
/// once per candidate edge during interactive editing.
pub fn would_create_cycle(edges: &[Edge], source_id: &str, target_id: &str) -> bool {
    if source_id.is_empty() || target_id.is_empty() {
        return false;
    }
    if source_id == target_id {
        return true;
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        if edge.source.is_empty() || edge.target.is_empty() {
            continue;
        }
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![target_id];
    while let Some(current) = stack.pop() {
        if current == source_id {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(next) = adjacency.get(current) {
            stack.extend(next.iter().copied());
        }
    }
    false
}
