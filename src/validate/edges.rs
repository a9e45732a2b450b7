//! Per-edge validation rules and the whole-graph passes.

use crate::behavior::{BehaviorTable, NodeKind, REROUTE_INPUT};
use crate::parse::graph::GraphModel;
use crate::parse::types::{Edge, Node, NodeMetadata, TypeDescriptor};
use crate::resolve;
use crate::typing;

use super::ValidationRequest;
use super::cycle::would_create_cycle;
use super::issue::{IssueCode, Severity, ValidationIssue};

/// Run the ordered per-edge checks, pushing every applicable issue.
///
/// Order: missing endpoints stop everything for the edge. Handle checks
/// need a metadata entry for both endpoint types and are skipped without
/// one; the cycle check needs no metadata and always runs, so an edge can
/// accumulate issues of different codes.
pub(super) fn validate_edge(
    model: &GraphModel<'_>,
    behaviors: &BehaviorTable<'_>,
    request: &ValidationRequest<'_>,
    edge: &Edge,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(source) = model.node(&edge.source) else {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Error,
            IssueCode::MissingSourceNode,
            format!("Edge '{}' references unknown source node '{}'", edge.id, edge.source),
        ));
        return;
    };
    let Some(target) = model.node(&edge.target) else {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Error,
            IssueCode::MissingTargetNode,
            format!("Edge '{}' references unknown target node '{}'", edge.id, edge.target),
        ));
        return;
    };

    let source_meta = request.metadata.get(&source.node_type);
    let target_meta = request.metadata.get(&target.node_type);
    if source_meta.is_some() && target_meta.is_some() {
        check_handles(
            model, behaviors, request, edge, source, target, source_meta, target_meta, issues,
        );
    }

    if would_create_cycle(request.edges, &edge.source, &edge.target) {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Error,
            IssueCode::PotentialCycle,
            format!(
                "Edge '{}' is part of a cycle through '{}' and '{}'",
                edge.id, edge.source, edge.target
            ),
        ));
    }
}

/// Handle-name presence, handle resolution, then type compatibility.
/// Absent handle names are warnings and stop the remaining checks.
#[allow(clippy::too_many_arguments)]
fn check_handles(
    model: &GraphModel<'_>,
    behaviors: &BehaviorTable<'_>,
    request: &ValidationRequest<'_>,
    edge: &Edge,
    source: &Node,
    target: &Node,
    source_meta: Option<&NodeMetadata>,
    target_meta: Option<&NodeMetadata>,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(source_handle) = edge.source_handle.as_deref() else {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Warning,
            IssueCode::InvalidSourceHandle,
            format!("Edge '{}' has no source handle", edge.id),
        ));
        return;
    };
    let Some(target_handle) = edge.target_handle.as_deref() else {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Warning,
            IssueCode::InvalidTargetHandle,
            format!("Edge '{}' has no target handle", edge.id),
        ));
        return;
    };

    let output = resolve::find_output_handle(source, source_handle, source_meta);
    if output.is_none() {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Error,
            IssueCode::InvalidSourceHandle,
            format!(
                "Output handle '{}' not found on node '{}' (type '{}'); available outputs: {}",
                source_handle,
                source.id,
                source.node_type,
                name_list(resolve::available_output_names(source, source_meta)),
            ),
        ));
    }

    let input = resolve::find_input_handle(target, target_handle, target_meta);
    if input.is_none() {
        issues.push(ValidationIssue::for_edge(
            edge,
            Severity::Error,
            IssueCode::InvalidTargetHandle,
            format!(
                "Input handle '{}' not found on node '{}' (type '{}'); available inputs: {}",
                target_handle,
                target.id,
                target.node_type,
                name_list(resolve::available_input_names(target, target_meta)),
            ),
        ));
    }

    if let (Some(_), Some(input)) = (&output, &input)
        && !edge.is_control_edge
    {
        check_edge_types(model, behaviors, request, edge, source_handle, &input.ty(), issues);
        check_streaming_source(behaviors, edge, source, &input.ty(), issues);
    }
}

/// Type compatibility of the effective source type (resolved through any
/// reroute chain) against the consumer's declared type.
fn check_edge_types(
    model: &GraphModel<'_>,
    behaviors: &BehaviorTable<'_>,
    request: &ValidationRequest<'_>,
    edge: &Edge,
    source_handle: &str,
    consumer: &TypeDescriptor,
    issues: &mut Vec<ValidationIssue>,
) {
    let resolved = resolve::resolve_effective_source_type(
        model,
        behaviors,
        request.metadata,
        &edge.source,
        source_handle,
    );
    if typing::is_connectable(&resolved.descriptor, consumer, request.strict_types) {
        return;
    }
    let severity = if request.strict_types {
        Severity::Error
    } else {
        Severity::Warning
    };
    issues.push(ValidationIssue::for_edge(
        edge,
        severity,
        IssueCode::TypeMismatch,
        format!(
            "Edge '{}' connects '{}' output to '{}' input",
            edge.id, resolved.slug, consumer.name
        ),
    ));
}

/// Streaming outputs feeding a non-stream consumer get an advisory note;
/// the consumer will observe incremental values.
fn check_streaming_source(
    behaviors: &BehaviorTable<'_>,
    edge: &Edge,
    source: &Node,
    consumer: &TypeDescriptor,
    issues: &mut Vec<ValidationIssue>,
) {
    if !behaviors.of(source).streaming_output {
        return;
    }
    if consumer.is_any() || consumer.name == "stream" {
        return;
    }
    issues.push(ValidationIssue::for_edge(
        edge,
        Severity::Info,
        IssueCode::StreamingSource,
        format!(
            "Node '{}' produces a streaming output; '{}' will receive incremental values",
            source.id, edge.target
        ),
    ));
}

/// Whole-graph pass: classify edges with absent endpoints independently
/// of the handle checks. Both endpoints missing is an orphaned edge; one
/// missing re-confirms the per-edge finding.
pub(super) fn check_orphaned_edges(
    model: &GraphModel<'_>,
    edges: &[Edge],
    issues: &mut Vec<ValidationIssue>,
) {
    for edge in edges {
        match (model.contains(&edge.source), model.contains(&edge.target)) {
            (false, false) => issues.push(ValidationIssue::for_edge(
                edge,
                Severity::Error,
                IssueCode::OrphanedEdge,
                format!(
                    "Edge '{}' references no existing nodes ('{}' -> '{}')",
                    edge.id, edge.source, edge.target
                ),
            )),
            (false, true) => issues.push(ValidationIssue::for_edge(
                edge,
                Severity::Error,
                IssueCode::MissingSourceNode,
                format!("Edge '{}' references unknown source node '{}'", edge.id, edge.source),
            )),
            (true, false) => issues.push(ValidationIssue::for_edge(
                edge,
                Severity::Error,
                IssueCode::MissingTargetNode,
                format!("Edge '{}' references unknown target node '{}'", edge.id, edge.target),
            )),
            (true, true) => {}
        }
    }
}

/// Whole-graph pass: a reroute input handle fed by more than one edge is
/// already-invalid state; resolution follows the first match in edge
/// order, so the extras are flagged rather than silently ignored.
pub(super) fn check_reroute_fan_in(
    nodes: &[Node],
    edges: &[Edge],
    behaviors: &BehaviorTable<'_>,
    issues: &mut Vec<ValidationIssue>,
) {
    for node in nodes {
        if behaviors.of(node).kind != NodeKind::Reroute {
            continue;
        }
        let feeders: Vec<&Edge> = edges
            .iter()
            .filter(|e| {
                e.target == node.id && e.target_handle.as_deref() == Some(REROUTE_INPUT)
            })
            .collect();
        if feeders.len() > 1 {
            issues.push(ValidationIssue::for_edge(
                feeders[1],
                Severity::Warning,
                IssueCode::MultipleInputsOnSingleHandle,
                format!(
                    "{} edges feed the single input of reroute node '{}'; only the first is used",
                    feeders.len(),
                    node.id
                ),
            ));
        }
    }
}

fn name_list(names: Vec<String>) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
