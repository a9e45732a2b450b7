//! Integration tests for graph-shape metrics.

mod helpers;

use helpers::*;
use validator::stats::{compute_complexity_score, compute_max_depth, workflow_stats};

#[test]
fn empty_graph_has_depth_zero() {
    assert_eq!(compute_max_depth(&[], &[]), 0);
}

#[test]
fn single_isolated_node_has_depth_zero() {
    assert_eq!(compute_max_depth(&[node("a", "t")], &[]), 0);
}

#[test]
fn two_connected_nodes_have_depth_one() {
    let nodes = vec![node("a", "t"), node("b", "t")];
    let edges = vec![bare_edge("e1", "a", "b")];
    assert_eq!(compute_max_depth(&nodes, &edges), 1);
}

#[test]
fn linear_chain_of_four_has_depth_three() {
    let nodes = vec![node("a", "t"), node("b", "t"), node("c", "t"), node("d", "t")];
    let edges = vec![
        bare_edge("e1", "a", "b"),
        bare_edge("e2", "b", "c"),
        bare_edge("e3", "c", "d"),
    ];
    assert_eq!(compute_max_depth(&nodes, &edges), 3);
}

#[test]
fn diamond_of_four_has_depth_two() {
    let nodes = vec![node("a", "t"), node("b", "t"), node("c", "t"), node("d", "t")];
    let edges = vec![
        bare_edge("e1", "a", "b"),
        bare_edge("e2", "a", "c"),
        bare_edge("e3", "b", "d"),
        bare_edge("e4", "c", "d"),
    ];
    assert_eq!(compute_max_depth(&nodes, &edges), 2);
}

#[test]
fn dangling_edges_do_not_count_toward_depth() {
    let nodes = vec![node("a", "t"), node("b", "t")];
    let edges = vec![bare_edge("e1", "a", "b"), bare_edge("e2", "b", "ghost")];
    assert_eq!(compute_max_depth(&nodes, &edges), 1);
}

#[test]
fn depth_terminates_on_a_cyclic_input() {
    // Not a legal workflow, but the analyzer must not hang or overflow.
    let nodes = vec![node("a", "t"), node("b", "t"), node("c", "t")];
    let edges = vec![
        bare_edge("e1", "a", "b"),
        bare_edge("e2", "b", "c"),
        bare_edge("e3", "c", "b"),
    ];
    let depth = compute_max_depth(&nodes, &edges);
    assert!(depth <= 3, "depth: {depth}");
}

#[test]
fn complexity_score_is_zero_at_the_origin() {
    assert_eq!(compute_complexity_score(0, 0, 0, 0), 0.0);
}

#[test]
fn complexity_score_is_monotone_in_each_input() {
    let base = compute_complexity_score(3, 2, 1, 1);
    assert!(compute_complexity_score(4, 2, 1, 1) > base);
    assert!(compute_complexity_score(3, 3, 1, 1) > base);
    assert!(compute_complexity_score(3, 2, 2, 1) > base);
    assert!(compute_complexity_score(3, 2, 1, 2) > base);
}

#[test]
fn aggregate_stats_count_distinct_node_types() {
    let nodes = vec![
        node("a", "textPrompt"),
        node("b", "textPrompt"),
        node("c", "llmCall"),
    ];
    let edges = vec![bare_edge("e1", "a", "c"), bare_edge("e2", "b", "c")];
    let stats = workflow_stats(&nodes, &edges);
    assert_eq!(stats.node_count, 3);
    assert_eq!(stats.edge_count, 2);
    assert_eq!(stats.max_depth, 1);
    assert_eq!(stats.distinct_node_types, 2);
    assert_eq!(
        stats.complexity_score,
        compute_complexity_score(3, 2, 1, 2)
    );
}
