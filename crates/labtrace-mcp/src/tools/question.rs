//! add_question tool - record a research question

use super::{open_store, parse_agent, AddOutcome};
use crate::error::McpError;
use serde::Deserialize;
use std::path::Path;

/// Parameters for recording a question
#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    /// The question text
    pub label: String,
    /// URI of the human or AI agent recording it
    pub agent: String,
    /// Project file override (server default when absent)
    #[serde(default)]
    pub project_path: Option<String>,
}

/// Handle add_question tool invocation
///
/// Records the question together with its synthesized QuestionFormation
/// activity and returns the minted URI.
pub fn handle_add_question(
    default_path: &Path,
    params: QuestionParams,
) -> Result<AddOutcome, McpError> {
    let agent = parse_agent(&params.agent)?;
    let store = open_store(default_path, params.project_path.as_deref());
    let uri = store.add_question(&params.label, Some(&agent))?;
    let message = format!("Question added to {}", store.path().display());
    Ok(AddOutcome::success(uri, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_params_deserialize() {
        let json = r#"{
            "label": "Does X inhibit Y?",
            "agent": "urn:agent:1",
            "project_path": "/tmp/p.ttl"
        }"#;

        let params: QuestionParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.label, "Does X inhibit Y?");
        assert_eq!(params.agent, "urn:agent:1");
        assert_eq!(params.project_path.as_deref(), Some("/tmp/p.ttl"));
    }

    #[test]
    fn test_project_path_optional() {
        let json = r#"{"label": "q?", "agent": "urn:agent:1"}"#;
        let params: QuestionParams = serde_json::from_str(json).unwrap();
        assert!(params.project_path.is_none());
    }

    #[test]
    fn test_handle_records_question() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.ttl");
        let outcome = handle_add_question(
            &path,
            QuestionParams {
                label: "Does X inhibit Y?".to_string(),
                agent: "urn:agent:1".to_string(),
                project_path: None,
            },
        )
        .unwrap();
        assert_eq!(outcome.status, "success");
        assert!(outcome.uri.starts_with("http://labtrace.io/record/question/"));
        assert!(path.exists());
    }

    #[test]
    fn test_bad_agent_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = handle_add_question(
            &dir.path().join("p.ttl"),
            QuestionParams {
                label: "q?".to_string(),
                agent: "not a uri".to_string(),
                project_path: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.error_code(), -32602);
    }
}
