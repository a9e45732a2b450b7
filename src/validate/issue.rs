//! Issue records: the data form every validation anomaly takes.

use serde::{Deserialize, Serialize};

use crate::parse::types::Edge;

/// Closed severity set. Mapping functions are total, so there is no
/// runtime path for an unknown severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank; errors first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }

    /// CSS class the issue panel attaches to a rendered row.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Error => "issue-error",
            Severity::Warning => "issue-warning",
            Severity::Info => "issue-info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Machine-readable anomaly codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    MissingSourceNode,
    MissingTargetNode,
    InvalidSourceHandle,
    InvalidTargetHandle,
    PotentialCycle,
    OrphanedEdge,
    MultipleInputsOnSingleHandle,
    TypeMismatch,
    StreamingSource,
}

/// One reported anomaly, always attached to an edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub edge_id: String,
    pub source_id: String,
    pub target_id: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
    pub severity: Severity,
    pub code: IssueCode,
    pub message: String,
}

impl ValidationIssue {
    pub fn for_edge(
        edge: &Edge,
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            edge_id: edge.id.clone(),
            source_id: edge.source.clone(),
            target_id: edge.target.clone(),
            source_handle: edge.source_handle.clone(),
            target_handle: edge.target_handle.clone(),
            severity,
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{:?}] {} (edge '{}')",
            self.severity, self.code, self.message, self.edge_id
        )
    }
}

/// Aggregated outcome of one validation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub workflow_id: String,
    pub issues: Vec<ValidationIssue>,
    pub is_valid: bool,
    pub edge_count: usize,
    pub issue_count: usize,
}

impl ValidationResult {
    /// `is_valid` iff no issue carries error severity.
    pub fn new(workflow_id: &str, edge_count: usize, issues: Vec<ValidationIssue>) -> Self {
        let is_valid = !issues.iter().any(|i| i.severity == Severity::Error);
        ValidationResult {
            workflow_id: workflow_id.to_string(),
            is_valid,
            edge_count,
            issue_count: issues.len(),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ranks_order_errors_first() {
        assert!(Severity::Error.rank() < Severity::Warning.rank());
        assert!(Severity::Warning.rank() < Severity::Info.rank());
    }

    #[test]
    fn result_is_valid_only_without_errors() {
        let edge = Edge {
            id: "e1".into(),
            source: "a".into(),
            target: "b".into(),
            source_handle: None,
            target_handle: None,
            is_control_edge: false,
        };
        let warning = ValidationIssue::for_edge(
            &edge,
            Severity::Warning,
            IssueCode::InvalidSourceHandle,
            "missing handle",
        );
        let result = ValidationResult::new("wf", 1, vec![warning.clone()]);
        assert!(result.is_valid);
        assert_eq!(result.issue_count, 1);

        let error = ValidationIssue::for_edge(
            &edge,
            Severity::Error,
            IssueCode::PotentialCycle,
            "cycle",
        );
        let result = ValidationResult::new("wf", 1, vec![warning, error]);
        assert!(!result.is_valid);
    }

    #[test]
    fn codes_serialize_snake_case() {
        let json = serde_json::to_string(&IssueCode::MissingSourceNode).unwrap();
        assert_eq!(json, "\"missing_source_node\"");
        let json = serde_json::to_string(&IssueCode::MultipleInputsOnSingleHandle).unwrap();
        assert_eq!(json, "\"multiple_inputs_on_single_handle\"");
    }
}
