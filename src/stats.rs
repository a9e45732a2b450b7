//! Graph-shape metrics: dependency depth and a complexity heuristic.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::parse::types::{Edge, Node};

/// Longest dependency chain in the graph, measured in hops.
///
/// Only edges whose endpoints both exist count. Nodes with no incoming
/// edges are roots; the depth of a root is the longest path below it,
/// memoized over the shared DAG. An empty node set is depth 0, a single
/// isolated node is 0, two connected nodes are 1.
pub fn compute_max_depth(nodes: &[Node], edges: &[Edge]) -> usize {
    if nodes.is_empty() {
        return 0;
    }

    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut in_degree: HashMap<&str, usize> = ids.iter().map(|&id| (id, 0)).collect();
    for edge in edges {
        let (source, target) = (edge.source.as_str(), edge.target.as_str());
        if !ids.contains(source) || !ids.contains(target) {
            continue;
        }
        children.entry(source).or_default().push(target);
        if let Some(count) = in_degree.get_mut(target) {
            *count += 1;
        }
    }

    let mut memo: HashMap<&str, usize> = HashMap::new();
    let mut max_depth = 0;
    for node in nodes {
        let id = node.id.as_str();
        if in_degree.get(id).copied() == Some(0) {
            let mut visiting = HashSet::new();
            max_depth = max_depth.max(longest_path(id, &children, &mut memo, &mut visiting));
        }
    }
    max_depth
}

fn longest_path<'a>(
    id: &'a str,
    children: &HashMap<&'a str, Vec<&'a str>>,
    memo: &mut HashMap<&'a str, usize>,
    visiting: &mut HashSet<&'a str>,
) -> usize {
    if let Some(&depth) = memo.get(id) {
        return depth;
    }
    if !visiting.insert(id) {
        // Cycle guard; depth through a back edge contributes nothing.
        return 0;
    }
    let depth = children
        .get(id)
        .map(|kids| {
            kids.iter()
                .map(|&kid| 1 + longest_path(kid, children, memo, visiting))
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);
    visiting.remove(id);
    memo.insert(id, depth);
    depth
}

const NODE_WEIGHT: f64 = 1.0;
const EDGE_WEIGHT: f64 = 1.5;
const DEPTH_WEIGHT: f64 = 2.0;
const DIVERSITY_WEIGHT: f64 = 1.2;

/// Heuristic complexity signal: a weighted sum, monotonically increasing
/// in each input and zero at the origin. Feeds the "workflow is getting
/// large" warning in the stats panel; carries no correctness meaning.
pub fn compute_complexity_score(
    node_count: usize,
    edge_count: usize,
    depth: usize,
    type_diversity: usize,
) -> f64 {
    node_count as f64 * NODE_WEIGHT
        + edge_count as f64 * EDGE_WEIGHT
        + depth as f64 * DEPTH_WEIGHT
        + type_diversity as f64 * DIVERSITY_WEIGHT
}

/// Aggregate metrics consumed by the editor's statistics panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub max_depth: usize,
    pub distinct_node_types: usize,
    pub complexity_score: f64,
}

pub fn workflow_stats(nodes: &[Node], edges: &[Edge]) -> WorkflowStats {
    let distinct_node_types = nodes
        .iter()
        .map(|n| n.node_type.as_str())
        .collect::<HashSet<_>>()
        .len();
    let max_depth = compute_max_depth(nodes, edges);
    WorkflowStats {
        node_count: nodes.len(),
        edge_count: edges.len(),
        max_depth,
        distinct_node_types,
        complexity_score: compute_complexity_score(
            nodes.len(),
            edges.len(),
            max_depth,
            distinct_node_types,
        ),
    }
}
