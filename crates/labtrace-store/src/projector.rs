//! Query projector: persisted graph → flat records
//!
//! SPARQL evaluation is delegated to the RDF engine; this module only
//! shapes solutions into plain records for external consumers (tree views,
//! CLI tables). A missing project file projects to an empty sequence.

use crate::{gateway, vocab, StoreError};
use labtrace_domain::EntityKind;
use oxigraph::model::Term;
use oxigraph::sparql::{QueryResults, QuerySolution};
use oxigraph::store::Store;
use serde::Serialize;
use std::path::Path;

/// One Evidence entity, flattened.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceRecord {
    /// Subject URI
    pub uri: String,
    /// Display label (derived from content at creation time)
    pub label: Option<String>,
    /// The extracted finding
    pub content: String,
    /// Formatted bibliographic citation
    pub citation: String,
    /// DOI or URL of the source
    pub source: String,
    /// Generation timestamp, RFC 3339
    pub timestamp: Option<String>,
    /// Attributed agent URI
    pub agent: Option<String>,
}

/// One Question entity, flattened.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRecord {
    /// Subject URI
    pub uri: String,
    /// The question text
    pub label: String,
    /// Attributed agent URI
    pub agent: Option<String>,
}

/// Generic flat record for any entity kind.
#[derive(Debug, Clone, Serialize)]
pub struct EntityRecord {
    /// Subject URI
    pub uri: String,
    /// Display label, when the kind carries one
    pub label: Option<String>,
    /// Generation timestamp, RFC 3339
    pub timestamp: Option<String>,
    /// Attributed agent URI
    pub agent: Option<String>,
}

/// Project all Evidence entities, newest first.
pub fn evidence(path: &Path) -> Result<Vec<EvidenceRecord>, StoreError> {
    let Some(store) = gateway::load(path)? else {
        return Ok(Vec::new());
    };
    let query = format!(
        r#"
        PREFIX labtrace: <{labtrace}>
        PREFIX prov: <{prov}>
        PREFIX dcterms: <{dcterms}>
        PREFIX rdfs: <{rdfs}>

        SELECT ?uri ?label ?content ?citation ?source ?timestamp ?agent
        WHERE {{
            ?uri a labtrace:Evidence .
            ?uri labtrace:content ?content .
            ?uri dcterms:bibliographicCitation ?citation .
            ?uri dcterms:source ?source .
            OPTIONAL {{ ?uri rdfs:label ?label }}
            OPTIONAL {{ ?uri prov:generatedAtTime ?timestamp }}
            OPTIONAL {{ ?uri prov:wasAttributedTo ?agent }}
        }}
        ORDER BY DESC(?timestamp)
        "#,
        labtrace = vocab::NS_LABTRACE,
        prov = vocab::NS_PROV,
        dcterms = vocab::NS_DCTERMS,
        rdfs = vocab::NS_RDFS,
    );

    solutions(&store, &query)?
        .into_iter()
        .map(|row| {
            Ok(EvidenceRecord {
                uri: required(&row, "uri")?,
                label: optional(&row, "label"),
                content: required(&row, "content")?,
                citation: required(&row, "citation")?,
                source: required(&row, "source")?,
                timestamp: optional(&row, "timestamp"),
                agent: optional(&row, "agent"),
            })
        })
        .collect()
}

/// Project all Question entities.
pub fn questions(path: &Path) -> Result<Vec<QuestionRecord>, StoreError> {
    let Some(store) = gateway::load(path)? else {
        return Ok(Vec::new());
    };
    let query = format!(
        r#"
        PREFIX labtrace: <{labtrace}>
        PREFIX prov: <{prov}>
        PREFIX rdfs: <{rdfs}>

        SELECT ?uri ?label ?agent
        WHERE {{
            ?uri a labtrace:Question .
            ?uri rdfs:label ?label .
            OPTIONAL {{ ?uri prov:wasAttributedTo ?agent }}
        }}
        "#,
        labtrace = vocab::NS_LABTRACE,
        prov = vocab::NS_PROV,
        rdfs = vocab::NS_RDFS,
    );

    solutions(&store, &query)?
        .into_iter()
        .map(|row| {
            Ok(QuestionRecord {
                uri: required(&row, "uri")?,
                label: required(&row, "label")?,
                agent: optional(&row, "agent"),
            })
        })
        .collect()
}

/// Project every entity of the given kind, newest first when timestamped.
pub fn records(path: &Path, kind: EntityKind) -> Result<Vec<EntityRecord>, StoreError> {
    let Some(store) = gateway::load(path)? else {
        return Ok(Vec::new());
    };
    let query = format!(
        r#"
        PREFIX labtrace: <{labtrace}>
        PREFIX prov: <{prov}>
        PREFIX rdfs: <{rdfs}>

        SELECT ?uri ?label ?timestamp ?agent
        WHERE {{
            ?uri a labtrace:{class} .
            OPTIONAL {{ ?uri rdfs:label ?label }}
            OPTIONAL {{ ?uri prov:generatedAtTime ?timestamp }}
            OPTIONAL {{ ?uri prov:wasAttributedTo ?agent }}
        }}
        ORDER BY DESC(?timestamp)
        "#,
        labtrace = vocab::NS_LABTRACE,
        prov = vocab::NS_PROV,
        rdfs = vocab::NS_RDFS,
        class = kind.class_name(),
    );

    solutions(&store, &query)?
        .into_iter()
        .map(|row| {
            Ok(EntityRecord {
                uri: required(&row, "uri")?,
                label: optional(&row, "label"),
                timestamp: optional(&row, "timestamp"),
                agent: optional(&row, "agent"),
            })
        })
        .collect()
}

fn solutions(store: &Store, query: &str) -> Result<Vec<QuerySolution>, StoreError> {
    let results = store
        .query(query)
        .map_err(|e| StoreError::Query(e.to_string()))?;
    match results {
        QueryResults::Solutions(solutions) => solutions
            .map(|s| s.map_err(|e| StoreError::Query(e.to_string())))
            .collect(),
        _ => Err(StoreError::Query(
            "projection query returned a non-tabular result".to_string(),
        )),
    }
}

fn term_text(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::Literal(literal) => literal.value().to_string(),
        other => other.to_string(),
    }
}

fn required(row: &QuerySolution, var: &str) -> Result<String, StoreError> {
    row.get(var)
        .map(term_text)
        .ok_or_else(|| StoreError::Query(format!("solution is missing '{}'", var)))
}

fn optional(row: &QuerySolution, var: &str) -> Option<String> {
    row.get(var).map(term_text)
}
