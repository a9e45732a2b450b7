//! Errors for the crate's fallible entry surface.
//!
//! Validation anomalies are never errors; they come back as
//! [`ValidationIssue`](crate::validate::ValidationIssue) records. The only
//! thing that can fail is deserializing a snapshot handed in as JSON.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse workflow snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
