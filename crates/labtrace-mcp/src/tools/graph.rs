//! Graph read tools - export Turtle or the JSON projection

use super::open_store;
use crate::error::McpError;
use labtrace_store::GraphJson;
use serde::Deserialize;
use std::path::Path;

/// Parameters for the graph read tools
#[derive(Debug, Default, Deserialize)]
pub struct GraphParams {
    /// Project file override (server default when absent)
    #[serde(default)]
    pub project_path: Option<String>,
}

/// Handle get_provenance_graph tool invocation
///
/// Returns the current provenance graph in Turtle format. A missing
/// project file exports as the empty graph, not an error.
pub fn handle_get_graph(default_path: &Path, params: GraphParams) -> Result<String, McpError> {
    let store = open_store(default_path, params.project_path.as_deref());
    Ok(store.export_turtle()?)
}

/// Handle get_provenance_graph_json tool invocation
///
/// Returns the projection consumed by tree-view UIs:
/// `{"evidence": [...], "questions": [...]}`.
pub fn handle_get_graph_json(
    default_path: &Path,
    params: GraphParams,
) -> Result<GraphJson, McpError> {
    let store = open_store(default_path, params.project_path.as_deref());
    Ok(store.graph_json()?)
}
