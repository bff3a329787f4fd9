//! RDF vocabulary: namespaces, fixed terms, and predicate mapping

use labtrace_domain::{ActivityKind, EntityKind, Field, Relation};
use oxigraph::model::{NamedNode, NamedNodeRef};

/// Domain ontology namespace.
pub const NS_LABTRACE: &str = "http://labtrace.io/ontology#";
/// W3C PROV-O namespace.
pub const NS_PROV: &str = "http://www.w3.org/ns/prov#";
/// Dublin Core terms namespace.
pub const NS_DCTERMS: &str = "http://purl.org/dc/terms/";
/// RDF Schema namespace.
pub const NS_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XML Schema datatypes namespace.
pub const NS_XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// `prov:Entity`
pub const PROV_ENTITY: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Entity");
/// `prov:Activity`
pub const PROV_ACTIVITY: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Activity");
/// `prov:Agent`
pub const PROV_AGENT: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Agent");
/// `prov:wasAttributedTo`
pub const PROV_WAS_ATTRIBUTED_TO: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasAttributedTo");
/// `prov:generatedAtTime`
pub const PROV_GENERATED_AT_TIME: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#generatedAtTime");
/// `prov:wasAssociatedWith`
pub const PROV_WAS_ASSOCIATED_WITH: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasAssociatedWith");
/// `rdfs:label`
pub const RDFS_LABEL: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
/// `dcterms:bibliographicCitation`
pub const DCTERMS_BIBLIOGRAPHIC_CITATION: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://purl.org/dc/terms/bibliographicCitation");
/// `dcterms:source`
pub const DCTERMS_SOURCE: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://purl.org/dc/terms/source");

/// Class node for an entity kind within the domain namespace.
pub fn entity_class(kind: EntityKind) -> NamedNode {
    NamedNode::new_unchecked(format!("{}{}", NS_LABTRACE, kind.class_name()))
}

/// Class node for an activity kind within the domain namespace.
pub fn activity_class(kind: ActivityKind) -> NamedNode {
    NamedNode::new_unchecked(format!("{}{}", NS_LABTRACE, kind.class_name()))
}

/// Predicate node for a scalar field.
pub fn field_predicate(field: Field) -> NamedNode {
    match field {
        Field::Label => RDFS_LABEL.into_owned(),
        Field::Citation => DCTERMS_BIBLIOGRAPHIC_CITATION.into_owned(),
        Field::Source => DCTERMS_SOURCE.into_owned(),
        Field::Content
        | Field::Method
        | Field::Parameter
        | Field::Value
        | Field::Unit
        | Field::Nature
        | Field::Derivation => {
            NamedNode::new_unchecked(format!("{}{}", NS_LABTRACE, field.name()))
        }
    }
}

/// Predicate node for a provenance relation.
pub fn relation_predicate(relation: Relation) -> NamedNode {
    match relation {
        Relation::WasDerivedFrom
        | Relation::WasGeneratedBy
        | Relation::Used
        | Relation::WasInformedBy => {
            NamedNode::new_unchecked(format!("{}{}", NS_PROV, relation.name()))
        }
        Relation::Supports | Relation::Contradicts | Relation::HasUncertainty => {
            NamedNode::new_unchecked(format!("{}{}", NS_LABTRACE, relation.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_predicates() {
        assert_eq!(
            field_predicate(Field::Label).as_str(),
            "http://www.w3.org/2000/01/rdf-schema#label"
        );
        assert_eq!(
            field_predicate(Field::Citation).as_str(),
            "http://purl.org/dc/terms/bibliographicCitation"
        );
        assert_eq!(
            field_predicate(Field::Content).as_str(),
            "http://labtrace.io/ontology#content"
        );
    }

    #[test]
    fn test_relation_predicates_split_by_namespace() {
        assert_eq!(
            relation_predicate(Relation::WasDerivedFrom).as_str(),
            "http://www.w3.org/ns/prov#wasDerivedFrom"
        );
        assert_eq!(
            relation_predicate(Relation::Supports).as_str(),
            "http://labtrace.io/ontology#supports"
        );
    }

    #[test]
    fn test_class_nodes() {
        assert_eq!(
            entity_class(EntityKind::Question).as_str(),
            "http://labtrace.io/ontology#Question"
        );
        assert_eq!(
            activity_class(ActivityKind::QuestionFormation).as_str(),
            "http://labtrace.io/ontology#QuestionFormation"
        );
    }
}
