//! add_hypothesis tool - record a testable claim

use super::{open_store, parse_agent, AddOutcome};
use crate::error::McpError;
use labtrace_domain::RecordUri;
use serde::Deserialize;
use std::path::Path;

/// Parameters for recording a hypothesis
#[derive(Debug, Deserialize)]
pub struct HypothesisParams {
    /// The hypothesis statement
    pub label: String,
    /// URI of the human or AI agent recording it
    pub agent: String,
    /// Project file override (server default when absent)
    #[serde(default)]
    pub project_path: Option<String>,
    /// URIs of evidence or premises this hypothesis is derived from
    #[serde(default)]
    pub derived_from: Vec<String>,
}

/// Handle add_hypothesis tool invocation
pub fn handle_add_hypothesis(
    default_path: &Path,
    params: HypothesisParams,
) -> Result<AddOutcome, McpError> {
    let agent = parse_agent(&params.agent)?;
    let derived_from: Vec<RecordUri> = params
        .derived_from
        .iter()
        .map(|uri| RecordUri::parse(uri))
        .collect::<Result<_, _>>()?;
    let store = open_store(default_path, params.project_path.as_deref());
    let uri = store.add_hypothesis(&params.label, Some(&agent), &derived_from)?;
    let message = format!("Hypothesis added to {}", store.path().display());
    Ok(AddOutcome::success(uri, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypothesis_params_default_derivation() {
        let json = r#"{"label": "X inhibits Y", "agent": "urn:agent:1"}"#;
        let params: HypothesisParams = serde_json::from_str(json).unwrap();
        assert!(params.derived_from.is_empty());
    }

    #[test]
    fn test_handle_rejects_wrong_derivation_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.ttl");
        let err = handle_add_hypothesis(
            &path,
            HypothesisParams {
                label: "X inhibits Y".to_string(),
                agent: "urn:agent:1".to_string(),
                project_path: None,
                derived_from: vec!["http://labtrace.io/record/dataset/abc".to_string()],
            },
        )
        .unwrap_err();
        assert_eq!(err.error_code(), -32602);
        assert!(!path.exists(), "nothing written for invalid input");
    }
}
