//! Edge validation phase: structural, handle, and type checks over one
//! immutable snapshot.
//!
//! Malformed input never fails the call; every anomaly becomes a
//! [`ValidationIssue`] and the pass always returns a complete
//! [`ValidationResult`].

pub mod cycle;
pub mod edges;
pub mod issue;

pub use cycle::would_create_cycle;
pub use issue::{IssueCode, Severity, ValidationIssue, ValidationResult};

use std::collections::HashMap;

use crate::behavior::BehaviorTable;
use crate::parse::graph::GraphModel;
use crate::parse::types::{Edge, Node, NodeMetadata, WorkflowSnapshot};

/// Borrowed inputs for one validation pass.
pub struct ValidationRequest<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
    pub metadata: &'a HashMap<String, NodeMetadata>,
    /// Used only to label the result.
    pub workflow_id: &'a str,
    /// Escalates type mismatches to errors and tightens generic matching.
    pub strict_types: bool,
}

/// Validate every edge of the snapshot.
///
/// Runs the ordered per-edge checks, then the whole-graph orphaned-edge
/// and reroute fan-in passes. Indices are built once per call; the
/// inputs are never mutated.
pub fn validate_edges(request: &ValidationRequest<'_>) -> ValidationResult {
    let model = GraphModel::build(request.nodes, request.edges);
    let behaviors = BehaviorTable::build(request.nodes, request.metadata);

    let mut issues = Vec::new();
    for edge in request.edges {
        edges::validate_edge(&model, &behaviors, request, edge, &mut issues);
    }
    edges::check_orphaned_edges(&model, request.edges, &mut issues);
    edges::check_reroute_fan_in(request.nodes, request.edges, &behaviors, &mut issues);

    ValidationResult::new(request.workflow_id, request.edges.len(), issues)
}

/// Convenience wrapper over an owned snapshot (wasm surface and tests).
pub fn validate_snapshot(snapshot: &WorkflowSnapshot, strict_types: bool) -> ValidationResult {
    validate_edges(&ValidationRequest {
        nodes: &snapshot.nodes,
        edges: &snapshot.edges,
        metadata: &snapshot.metadata,
        workflow_id: &snapshot.workflow_id,
        strict_types,
    })
}
