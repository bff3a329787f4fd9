//! Entity builder: validated record draft → RDF quad set

use crate::vocab;
use chrono::{DateTime, SecondsFormat, Utc};
use labtrace_domain::{EntityKind, Field, ProvLink, RecordDraft, RecordUri, ValidationError};
use oxigraph::model::vocab::{rdf, xsd};
use oxigraph::model::{GraphName, Literal, NamedNode, Quad};

/// How many characters of Evidence content become the derived label.
const DERIVED_LABEL_LEN: usize = 50;

/// A record reduced to its triple form, ready for the gateway.
#[derive(Debug)]
pub struct BuiltRecord {
    /// The minted subject URI
    pub uri: RecordUri,
    /// All quads for the record, its links, agent, and companion activity
    pub quads: Vec<Quad>,
}

/// Build the quad set for one record.
///
/// All-or-nothing: the draft and every provenance link are validated before
/// the first quad is constructed, so an invalid input never yields a
/// partial record. The subject URI is minted here and returned for the
/// caller's convenience.
///
/// A Question build also synthesizes its companion QuestionFormation
/// activity (URI derived from the question URI) and links the two with
/// `prov:wasGeneratedBy`; the ontology requires a generating activity for
/// every entity, and the formation step is implicit in the act of recording
/// the question.
pub fn build_record(
    draft: &RecordDraft,
    links: &[ProvLink],
    agent: Option<&RecordUri>,
    generated_at: DateTime<Utc>,
) -> Result<BuiltRecord, ValidationError> {
    draft.validate()?;
    for link in links {
        link.check(draft.kind())?;
    }

    let uri = RecordUri::mint(draft.kind());
    let subject = NamedNode::new_unchecked(uri.as_str());
    let mut quads = Vec::new();

    // Dual typing: domain class and the abstract PROV class.
    quads.push(Quad::new(
        subject.clone(),
        rdf::TYPE,
        vocab::entity_class(draft.kind()),
        GraphName::DefaultGraph,
    ));
    quads.push(Quad::new(
        subject.clone(),
        rdf::TYPE,
        vocab::PROV_ENTITY,
        GraphName::DefaultGraph,
    ));

    for (field, value) in draft.fields() {
        quads.push(Quad::new(
            subject.clone(),
            vocab::field_predicate(*field),
            Literal::new_simple_literal(value.clone()),
            GraphName::DefaultGraph,
        ));
    }

    // Evidence without an explicit label gets one derived from its content.
    if draft.kind() == EntityKind::Evidence && draft.get(Field::Label).is_none() {
        let content = draft.get(Field::Content).unwrap_or_default();
        quads.push(Quad::new(
            subject.clone(),
            vocab::field_predicate(Field::Label),
            Literal::new_simple_literal(derive_label(content)),
            GraphName::DefaultGraph,
        ));
    }

    for link in links {
        quads.push(Quad::new(
            subject.clone(),
            vocab::relation_predicate(link.relation),
            NamedNode::new_unchecked(link.target.as_str()),
            GraphName::DefaultGraph,
        ));
    }

    if let Some(agent) = agent {
        let agent_node = NamedNode::new_unchecked(agent.as_str());
        quads.push(Quad::new(
            subject.clone(),
            vocab::PROV_WAS_ATTRIBUTED_TO,
            agent_node.clone(),
            GraphName::DefaultGraph,
        ));
        quads.push(Quad::new(
            agent_node,
            rdf::TYPE,
            vocab::PROV_AGENT,
            GraphName::DefaultGraph,
        ));
    }

    quads.push(Quad::new(
        subject.clone(),
        vocab::PROV_GENERATED_AT_TIME,
        Literal::new_typed_literal(
            generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            xsd::DATE_TIME,
        ),
        GraphName::DefaultGraph,
    ));

    if draft.kind() == EntityKind::Question {
        let activity_uri = uri.generation_activity();
        let activity = NamedNode::new_unchecked(activity_uri.as_str());
        if let Some(activity_kind) = draft.kind().generating_activity() {
            quads.push(Quad::new(
                activity.clone(),
                rdf::TYPE,
                vocab::activity_class(activity_kind),
                GraphName::DefaultGraph,
            ));
        }
        quads.push(Quad::new(
            activity.clone(),
            rdf::TYPE,
            vocab::PROV_ACTIVITY,
            GraphName::DefaultGraph,
        ));
        quads.push(Quad::new(
            subject,
            vocab::relation_predicate(labtrace_domain::Relation::WasGeneratedBy),
            activity.clone(),
            GraphName::DefaultGraph,
        ));
        if let Some(agent) = agent {
            quads.push(Quad::new(
                activity,
                vocab::PROV_WAS_ASSOCIATED_WITH,
                NamedNode::new_unchecked(agent.as_str()),
                GraphName::DefaultGraph,
            ));
        }
    }

    Ok(BuiltRecord { uri, quads })
}

fn derive_label(content: &str) -> String {
    if content.chars().count() > DERIVED_LABEL_LEN {
        let truncated: String = content.chars().take(DERIVED_LABEL_LEN).collect();
        format!("{}...", truncated)
    } else {
        content.to_string()
    }
}
