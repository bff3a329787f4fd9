//! MCP tool implementations

mod evidence;
mod graph;
mod hypothesis;
mod method;
mod question;

pub use evidence::{handle_add_evidence, EvidenceParams};
pub use graph::{handle_get_graph, handle_get_graph_json, GraphParams};
pub use hypothesis::{handle_add_hypothesis, HypothesisParams};
pub use method::{handle_add_method, MethodParams};
pub use question::{handle_add_question, QuestionParams};

use crate::error::McpError;
use labtrace_domain::RecordUri;
use labtrace_store::ProvenanceStore;
use serde::Serialize;
use std::path::Path;

/// Success envelope returned by every add tool.
#[derive(Debug, Serialize)]
pub struct AddOutcome {
    /// Always "success"; failures are raised, never encoded here
    pub status: &'static str,
    /// Minted URI of the new record
    pub uri: String,
    /// Human-readable confirmation
    pub message: String,
}

impl AddOutcome {
    fn success(uri: RecordUri, message: String) -> Self {
        Self {
            status: "success",
            uri: uri.as_str().to_string(),
            message,
        }
    }
}

/// Open the store on the per-call path override, or the server default.
fn open_store(default_path: &Path, override_path: Option<&str>) -> ProvenanceStore {
    match override_path {
        Some(path) => ProvenanceStore::open(path),
        None => ProvenanceStore::open(default_path),
    }
}

/// Parse a caller-supplied agent URI.
fn parse_agent(agent: &str) -> Result<RecordUri, McpError> {
    Ok(RecordUri::parse(agent)?)
}
