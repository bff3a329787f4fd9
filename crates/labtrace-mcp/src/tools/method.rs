//! add_method tool - record an experimental method

use super::{open_store, parse_agent, AddOutcome};
use crate::error::McpError;
use labtrace_domain::RecordUri;
use serde::Deserialize;
use std::path::Path;

/// Parameters for recording an experimental method
#[derive(Debug, Deserialize)]
pub struct MethodParams {
    /// Short name of the method
    pub label: String,
    /// Description of the methodology (e.g. "GAMESS MRCI")
    #[serde(default)]
    pub method: Option<String>,
    /// Configured parameters as "name=value" strings
    #[serde(default)]
    pub parameters: Vec<String>,
    /// URI of the human or AI agent recording it
    pub agent: String,
    /// Project file override (server default when absent)
    #[serde(default)]
    pub project_path: Option<String>,
    /// URI of the hypothesis this method was designed for
    #[serde(default)]
    pub derived_from: Option<String>,
}

/// Handle add_method tool invocation
pub fn handle_add_method(
    default_path: &Path,
    params: MethodParams,
) -> Result<AddOutcome, McpError> {
    let agent = parse_agent(&params.agent)?;
    let derived_from = params
        .derived_from
        .as_deref()
        .map(RecordUri::parse)
        .transpose()?;
    let store = open_store(default_path, params.project_path.as_deref());
    let uri = store.add_method(
        &params.label,
        params.method.as_deref(),
        &params.parameters,
        Some(&agent),
        derived_from.as_ref(),
    )?;
    let message = format!("ExperimentalMethod added to {}", store.path().display());
    Ok(AddOutcome::success(uri, message))
}
