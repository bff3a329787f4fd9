//! add_evidence tool - record evidence from literature

use super::{open_store, parse_agent, AddOutcome};
use crate::error::McpError;
use labtrace_domain::RecordUri;
use serde::Deserialize;
use std::path::Path;

/// Parameters for recording evidence
#[derive(Debug, Deserialize)]
pub struct EvidenceParams {
    /// Textual summary of the finding extracted from the source
    pub content: String,
    /// Formatted bibliographic citation
    pub citation: String,
    /// DOI or URL of the source publication
    pub source: String,
    /// URI of the human or AI agent capturing the evidence
    pub agent: String,
    /// Project file override (server default when absent)
    #[serde(default)]
    pub project_path: Option<String>,
    /// URI of the question this evidence addresses
    #[serde(default)]
    pub relates_to_question: Option<String>,
}

/// Handle add_evidence tool invocation
pub fn handle_add_evidence(
    default_path: &Path,
    params: EvidenceParams,
) -> Result<AddOutcome, McpError> {
    let agent = parse_agent(&params.agent)?;
    let question = params
        .relates_to_question
        .as_deref()
        .map(RecordUri::parse)
        .transpose()?;
    let store = open_store(default_path, params.project_path.as_deref());
    let uri = store.add_evidence(
        &params.content,
        &params.citation,
        &params.source,
        Some(&agent),
        question.as_ref(),
    )?;
    let message = format!("Evidence added to {}", store.path().display());
    Ok(AddOutcome::success(uri, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_params_deserialize() {
        let json = r#"{
            "content": "X binds the Y active site",
            "citation": "Doe et al. 2024",
            "source": "doi:10.1000/xyz",
            "agent": "urn:agent:1",
            "relates_to_question": "http://labtrace.io/record/question/abc"
        }"#;

        let params: EvidenceParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.content, "X binds the Y active site");
        assert_eq!(
            params.relates_to_question.as_deref(),
            Some("http://labtrace.io/record/question/abc")
        );
        assert!(params.project_path.is_none());
    }

    #[test]
    fn test_handle_links_evidence_to_question() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.ttl");

        let question = super::super::handle_add_question(
            &path,
            super::super::QuestionParams {
                label: "Does X inhibit Y?".to_string(),
                agent: "urn:agent:1".to_string(),
                project_path: None,
            },
        )
        .unwrap();

        let outcome = handle_add_evidence(
            &path,
            EvidenceParams {
                content: "X binds the Y active site".to_string(),
                citation: "Doe et al. 2024".to_string(),
                source: "doi:10.1000/xyz".to_string(),
                agent: "urn:agent:1".to_string(),
                project_path: None,
                relates_to_question: Some(question.uri.clone()),
            },
        )
        .unwrap();
        assert_eq!(outcome.status, "success");

        let turtle = std::fs::read_to_string(&path).unwrap();
        assert!(turtle.contains(&question.uri));
    }

    #[test]
    fn test_missing_required_field_rejected_by_serde() {
        let json = r#"{"content": "only content", "agent": "urn:agent:1"}"#;
        assert!(serde_json::from_str::<EvidenceParams>(json).is_err());
    }
}
