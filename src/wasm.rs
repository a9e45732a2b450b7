//! WASM entry points for the browser editor.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::stats;
use crate::validate;

#[derive(Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
enum ValidateDto {
    #[serde(rename = "ok")]
    Ok { result: validate::ValidationResult },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
enum StatsDto {
    #[serde(rename = "ok")]
    Ok { stats: stats::WorkflowStats },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}

/// Validate a workflow snapshot JSON. Returns `{ status, result | message }`.
#[wasm_bindgen]
pub fn validate_workflow(json: &str, strict_types: bool) -> JsValue {
    let dto = match crate::parse::parse(json) {
        Ok(snapshot) => ValidateDto::Ok {
            result: validate::validate_snapshot(&snapshot, strict_types),
        },
        Err(e) => ValidateDto::ParseError {
            message: e.to_string(),
        },
    };
    serde_wasm_bindgen::to_value(&dto).unwrap_or(JsValue::NULL)
}

/// Compute graph-shape metrics for the stats panel.
#[wasm_bindgen]
pub fn workflow_stats(json: &str) -> JsValue {
    let dto = match crate::parse::parse(json) {
        Ok(snapshot) => StatsDto::Ok {
            stats: stats::workflow_stats(&snapshot.nodes, &snapshot.edges),
        },
        Err(e) => StatsDto::ParseError {
            message: e.to_string(),
        },
    };
    serde_wasm_bindgen::to_value(&dto).unwrap_or(JsValue::NULL)
}

/// Interactive pre-check while the user drags a connection: would adding
/// `source_id -> target_id` close a cycle? Unparseable input answers
/// `false` so the editor never blocks on a transport bug.
#[wasm_bindgen]
pub fn connection_would_cycle(edges_json: &str, source_id: &str, target_id: &str) -> bool {
    match serde_json::from_str::<Vec<crate::parse::types::Edge>>(edges_json) {
        Ok(edges) => validate::would_create_cycle(&edges, source_id, target_id),
        Err(_) => false,
    }
}

/// Resolve the effective type flowing out of `(node_id, handle)`, through
/// any reroute chain, for wire coloring and tooltips.
/// Returns `{ slug, color, label, type }`.
#[wasm_bindgen]
pub fn resolve_source_type(json: &str, node_id: &str, handle: &str) -> JsValue {
    let Ok(snapshot) = crate::parse::parse(json) else {
        return JsValue::NULL;
    };
    let model = crate::parse::GraphModel::build(&snapshot.nodes, &snapshot.edges);
    let behaviors = crate::behavior::BehaviorTable::build(&snapshot.nodes, &snapshot.metadata);
    let resolved = crate::resolve::resolve_effective_source_type(
        &model,
        &behaviors,
        &snapshot.metadata,
        node_id,
        handle,
    );
    serde_wasm_bindgen::to_value(&resolved).unwrap_or(JsValue::NULL)
}
