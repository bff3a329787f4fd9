//! labtrace Storage Layer
//!
//! Turns validated record drafts into RDF triples and keeps them in an
//! append-only Turtle file.
//!
//! # Architecture
//!
//! - `builder`: record draft + provenance links to quad set
//! - `gateway`: load-union-write persistence on the project file
//! - `projector`: SPARQL projections back out as flat records
//! - [`ProvenanceStore`]: the owned handle tying the three together
//!
//! The RDF engine (parsing, serialization, SPARQL) is oxigraph; this crate
//! never interprets Turtle syntax itself.
//!
//! # Examples
//!
//! ```no_run
//! use labtrace_store::ProvenanceStore;
//!
//! let store = ProvenanceStore::open("project.ttl");
//! let uri = store.add_question("Does X inhibit Y?", None).unwrap();
//! println!("recorded {}", uri);
//! ```

#![warn(missing_docs)]

use chrono::Utc;
use labtrace_domain::{
    EntityKind, Field, ProvLink, RecordDraft, RecordUri, Relation, UncertaintyNature,
    ValidationError,
};
use oxigraph::model::{GraphName, NamedNode, Quad};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub mod builder;
pub mod gateway;
pub mod projector;
pub mod vocab;

pub use builder::BuiltRecord;
pub use projector::{EntityRecord, EvidenceRecord, QuestionRecord};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record draft or provenance link failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The existing file at the project path is not parseable RDF.
    /// The call performed no write; the original file is untouched.
    #[error("Corrupt graph at {path}: {reason}")]
    CorruptGraph {
        /// The offending file
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// RDF engine fault (storage, serialization)
    #[error("Graph engine error: {0}")]
    Graph(String),

    /// Projection query fault
    #[error("Query error: {0}")]
    Query(String),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON projection of the graph for external consumers.
#[derive(Debug, Serialize)]
pub struct GraphJson {
    /// All Evidence entities, newest first
    pub evidence: Vec<EvidenceRecord>,
    /// All Question entities
    pub questions: Vec<QuestionRecord>,
}

/// Handle on one provenance graph file.
///
/// The handle owns nothing but the path: every operation re-reads the file,
/// so there is no cached state to invalidate and no teardown. Construct one
/// wherever a graph is needed and drop it when done.
///
/// # Concurrency
///
/// Single-writer access to the path is assumed. Two processes writing the
/// same file can race (last write wins); acceptable for the single-user
/// local usage this store targets.
pub struct ProvenanceStore {
    path: PathBuf,
}

impl ProvenanceStore {
    /// Open a store handle on the given project file path.
    ///
    /// The file need not exist yet; the first write creates it along with
    /// any missing parent directories.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The project file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build and persist one record. Returns the minted subject URI.
    ///
    /// This is the generic entry point; the `add_*` methods below are
    /// shorthands for the common chain steps.
    pub fn add_record(
        &self,
        draft: &RecordDraft,
        links: &[ProvLink],
        agent: Option<&RecordUri>,
    ) -> Result<RecordUri, StoreError> {
        let built = builder::build_record(draft, links, agent, Utc::now())?;
        gateway::persist(&self.path, &built.quads)?;
        info!(kind = %draft.kind(), uri = %built.uri, "record added");
        Ok(built.uri)
    }

    /// Record a research question.
    ///
    /// Also synthesizes the companion QuestionFormation activity (see
    /// [`builder::build_record`]).
    pub fn add_question(
        &self,
        label: &str,
        agent: Option<&RecordUri>,
    ) -> Result<RecordUri, StoreError> {
        let draft = RecordDraft::new(EntityKind::Question).field(Field::Label, label);
        self.add_record(&draft, &[], agent)
    }

    /// Record evidence extracted from literature.
    pub fn add_evidence(
        &self,
        content: &str,
        citation: &str,
        source: &str,
        agent: Option<&RecordUri>,
        relates_to_question: Option<&RecordUri>,
    ) -> Result<RecordUri, StoreError> {
        let draft = RecordDraft::new(EntityKind::Evidence)
            .field(Field::Content, content)
            .field(Field::Citation, citation)
            .field(Field::Source, source);
        let links: Vec<ProvLink> = relates_to_question
            .map(|q| ProvLink::new(Relation::WasDerivedFrom, q.clone()))
            .into_iter()
            .collect();
        self.add_record(&draft, &links, agent)
    }

    /// Record a hypothesis, optionally derived from evidence or premises.
    pub fn add_hypothesis(
        &self,
        label: &str,
        agent: Option<&RecordUri>,
        derived_from: &[RecordUri],
    ) -> Result<RecordUri, StoreError> {
        let draft = RecordDraft::new(EntityKind::Hypothesis).field(Field::Label, label);
        let links: Vec<ProvLink> = derived_from
            .iter()
            .map(|uri| ProvLink::new(Relation::WasDerivedFrom, uri.clone()))
            .collect();
        self.add_record(&draft, &links, agent)
    }

    /// Record an experimental method with its configured parameters.
    pub fn add_method(
        &self,
        label: &str,
        method: Option<&str>,
        parameters: &[String],
        agent: Option<&RecordUri>,
        derived_from: Option<&RecordUri>,
    ) -> Result<RecordUri, StoreError> {
        let mut draft = RecordDraft::new(EntityKind::ExperimentalMethod).field(Field::Label, label);
        if let Some(method) = method {
            draft = draft.field(Field::Method, method);
        }
        for parameter in parameters {
            draft = draft.field(Field::Parameter, parameter);
        }
        let links: Vec<ProvLink> = derived_from
            .map(|uri| ProvLink::new(Relation::WasDerivedFrom, uri.clone()))
            .into_iter()
            .collect();
        self.add_record(&draft, &links, agent)
    }

    /// Attach a reified uncertainty model to an existing entity.
    ///
    /// Mints the model, persists its triples together with the
    /// `hasUncertainty` edge from `entity`, and returns the model URI.
    pub fn attach_uncertainty(
        &self,
        entity: &RecordUri,
        nature: UncertaintyNature,
        derivation: Option<&str>,
    ) -> Result<RecordUri, StoreError> {
        let mut draft =
            RecordDraft::new(EntityKind::UncertaintyModel).field(Field::Nature, nature.as_str());
        if let Some(derivation) = derivation {
            draft = draft.field(Field::Derivation, derivation);
        }
        let built = builder::build_record(&draft, &[], None, Utc::now())?;

        // Range-check the edge when the target entity is one of ours.
        if let Some(kind) = entity.kind() {
            ProvLink::new(Relation::HasUncertainty, built.uri.clone()).check(kind)?;
        }

        let mut quads = built.quads;
        quads.push(Quad::new(
            NamedNode::new_unchecked(entity.as_str()),
            vocab::relation_predicate(Relation::HasUncertainty),
            NamedNode::new_unchecked(built.uri.as_str()),
            GraphName::DefaultGraph,
        ));
        gateway::persist(&self.path, &quads)?;
        info!(entity = %entity, model = %built.uri, "uncertainty attached");
        Ok(built.uri)
    }

    /// All Evidence entities, newest first. Missing file → empty.
    pub fn evidence(&self) -> Result<Vec<EvidenceRecord>, StoreError> {
        projector::evidence(&self.path)
    }

    /// All Question entities. Missing file → empty.
    pub fn questions(&self) -> Result<Vec<QuestionRecord>, StoreError> {
        projector::questions(&self.path)
    }

    /// All entities of one kind, flattened. Missing file → empty.
    pub fn records(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, StoreError> {
        projector::records(&self.path, kind)
    }

    /// The JSON projection consumed by tree views and similar UIs.
    pub fn graph_json(&self) -> Result<GraphJson, StoreError> {
        Ok(GraphJson {
            evidence: self.evidence()?,
            questions: self.questions()?,
        })
    }

    /// The whole graph as a Turtle string. Missing file → the empty graph.
    pub fn export_turtle(&self) -> Result<String, StoreError> {
        let store = match gateway::load(&self.path)? {
            Some(store) => store,
            None => gateway::new_store()?,
        };
        let bytes = gateway::serialize(&store)?;
        String::from_utf8(bytes).map_err(|e| StoreError::Graph(e.to_string()))
    }
}
