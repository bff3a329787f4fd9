//! Integration tests for labtrace-store
//!
//! These tests verify the full record → Turtle → projection cycle against
//! real files in a temp directory.

use labtrace_domain::{EntityKind, Field, RecordDraft, RecordUri, UncertaintyNature};
use labtrace_store::{ProvenanceStore, StoreError};
use std::fs;

fn agent() -> RecordUri {
    RecordUri::parse("urn:agent:1").unwrap()
}

#[test]
fn test_add_evidence_then_project_roundtrips_fields_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));

    let uri = store
        .add_evidence(
            "X binds the Y active site",
            "Doe et al., J. Chem. 2024",
            "doi:10.1000/xyz",
            Some(&agent()),
            None,
        )
        .unwrap();

    let records = store.evidence().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.uri, uri.as_str());
    assert_eq!(record.content, "X binds the Y active site");
    assert_eq!(record.citation, "Doe et al., J. Chem. 2024");
    assert_eq!(record.source, "doi:10.1000/xyz");
    assert_eq!(record.agent.as_deref(), Some("urn:agent:1"));
    assert!(record.timestamp.is_some());
}

#[test]
fn test_two_adds_accumulate_without_loss() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));

    let first = store
        .add_evidence("finding one", "cite one", "doi:10.1/1", Some(&agent()), None)
        .unwrap();
    let second = store
        .add_evidence("finding two", "cite two", "doi:10.1/2", Some(&agent()), None)
        .unwrap();
    assert_ne!(first, second);

    let records = store.evidence().unwrap();
    assert_eq!(records.len(), 2, "both writes survive the union");
    let uris: Vec<&str> = records.iter().map(|r| r.uri.as_str()).collect();
    assert!(uris.contains(&first.as_str()));
    assert!(uris.contains(&second.as_str()));
}

#[test]
fn test_missing_file_projects_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("never-written.ttl"));

    assert!(store.evidence().unwrap().is_empty());
    assert!(store.questions().unwrap().is_empty());
    let json = serde_json::to_value(store.graph_json().unwrap()).unwrap();
    assert_eq!(json["evidence"], serde_json::json!([]));
    assert_eq!(json["questions"], serde_json::json!([]));
}

#[test]
fn test_question_scenario_dual_typing_and_companion_activity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.ttl");
    let store = ProvenanceStore::open(&path);

    let uri = store
        .add_question("Does X inhibit Y?", Some(&agent()))
        .unwrap();

    let turtle = fs::read_to_string(&path).unwrap();
    // The file stays plain Turtle with the project prefixes bound.
    assert!(turtle.contains("@prefix prov:") || turtle.contains("PREFIX prov:"));

    // Inspect the actual triples rather than the serialization.
    let questions = store.questions().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].label, "Does X inhibit Y?");
    assert_eq!(questions[0].uri, uri.as_str());

    let oxi = oxigraph::store::Store::new().unwrap();
    oxi.load_from_reader(oxigraph::io::RdfFormat::Turtle, turtle.as_bytes())
        .unwrap();
    let ask = |pattern: &str| -> bool {
        match oxi.query(pattern).unwrap() {
            oxigraph::sparql::QueryResults::Boolean(b) => b,
            _ => panic!("expected boolean result"),
        }
    };
    assert!(ask(&format!(
        "ASK {{ <{uri}> a <http://labtrace.io/ontology#Question> }}",
        uri = uri
    )));
    assert!(ask(&format!(
        "ASK {{ <{uri}> a <http://www.w3.org/ns/prov#Entity> }}",
        uri = uri
    )));
    assert!(ask(&format!(
        "ASK {{ <{uri}> <http://www.w3.org/ns/prov#wasGeneratedBy> <{activity}> .
                <{activity}> a <http://labtrace.io/ontology#QuestionFormation> }}",
        uri = uri,
        activity = uri.generation_activity()
    )));
}

#[test]
fn test_evidence_relates_to_question_via_derivation_edge() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.ttl");
    let store = ProvenanceStore::open(&path);

    let question = store.add_question("Does X inhibit Y?", Some(&agent())).unwrap();
    let evidence = store
        .add_evidence(
            "X binds the Y active site",
            "Doe et al. 2024",
            "doi:10.1000/xyz",
            Some(&agent()),
            Some(&question),
        )
        .unwrap();

    let turtle = fs::read_to_string(&path).unwrap();
    let oxi = oxigraph::store::Store::new().unwrap();
    oxi.load_from_reader(oxigraph::io::RdfFormat::Turtle, turtle.as_bytes())
        .unwrap();
    let query = format!(
        "ASK {{ <{evidence}> <http://www.w3.org/ns/prov#wasDerivedFrom> <{question}> }}",
        evidence = evidence,
        question = question
    );
    match oxi.query(&query).unwrap() {
        oxigraph::sparql::QueryResults::Boolean(b) => assert!(b),
        _ => panic!("expected boolean result"),
    }
}

#[test]
fn test_corrupt_file_rejected_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.ttl");
    fs::write(&path, "{{{ not turtle at all").unwrap();
    let before = fs::read(&path).unwrap();

    let store = ProvenanceStore::open(&path);
    let err = store.add_question("q?", None).unwrap_err();
    assert!(matches!(err, StoreError::CorruptGraph { .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_validation_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.ttl");
    let store = ProvenanceStore::open(&path);

    let err = store.add_question("   ", None).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(!path.exists(), "no partial record on disk");
}

#[test]
fn test_export_turtle_roundtrip_preserves_triple_set() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));
    let question = store.add_question("q?", Some(&agent())).unwrap();
    store
        .add_evidence("c", "cite", "doi:10.1/1", Some(&agent()), Some(&question))
        .unwrap();

    let first = store.export_turtle().unwrap();

    // Parse the export back and re-serialize through a second file.
    let dir2 = tempfile::tempdir().unwrap();
    let path2 = dir2.path().join("copy.ttl");
    fs::write(&path2, &first).unwrap();
    let copy = ProvenanceStore::open(&path2);
    let second = copy.export_turtle().unwrap();

    let load = |text: &str| {
        let s = oxigraph::store::Store::new().unwrap();
        s.load_from_reader(oxigraph::io::RdfFormat::Turtle, text.as_bytes())
            .unwrap();
        s
    };
    let a = load(&first);
    let b = load(&second);
    assert_eq!(a.len().unwrap(), b.len().unwrap());
    for quad in a.iter() {
        let quad = quad.unwrap();
        assert!(b.contains(&quad).unwrap(), "lost triple: {}", quad);
    }
}

#[test]
fn test_export_turtle_on_missing_file_is_empty_graph() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("absent.ttl"));
    let turtle = store.export_turtle().unwrap();
    let oxi = oxigraph::store::Store::new().unwrap();
    oxi.load_from_reader(oxigraph::io::RdfFormat::Turtle, turtle.as_bytes())
        .unwrap();
    assert_eq!(oxi.len().unwrap(), 0);
}

#[test]
fn test_hypothesis_derived_from_evidence() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));
    let evidence = store
        .add_evidence("c", "cite", "doi:10.1/1", Some(&agent()), None)
        .unwrap();
    let hypothesis = store
        .add_hypothesis("X inhibits Y competitively", Some(&agent()), &[evidence.clone()])
        .unwrap();

    let records = store.records(EntityKind::Hypothesis).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].uri, hypothesis.as_str());
    assert_eq!(records[0].label.as_deref(), Some("X inhibits Y competitively"));
}

#[test]
fn test_hypothesis_rejects_derivation_from_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));
    let dataset = store
        .add_record(
            &RecordDraft::new(EntityKind::Dataset).field(Field::Label, "run-1"),
            &[],
            None,
        )
        .unwrap();

    let err = store
        .add_hypothesis("h", None, &[dataset])
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn test_method_with_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));
    let parameters = vec!["basis_set=cc-pVQZ".to_string(), "charge=0".to_string()];
    let uri = store
        .add_method("MRCI scan", Some("GAMESS MRCI"), &parameters, Some(&agent()), None)
        .unwrap();

    let turtle = store.export_turtle().unwrap();
    let oxi = oxigraph::store::Store::new().unwrap();
    oxi.load_from_reader(oxigraph::io::RdfFormat::Turtle, turtle.as_bytes())
        .unwrap();
    let query = format!(
        "SELECT ?p WHERE {{ <{uri}> <http://labtrace.io/ontology#parameter> ?p }}",
        uri = uri
    );
    match oxi.query(&query).unwrap() {
        oxigraph::sparql::QueryResults::Solutions(solutions) => {
            assert_eq!(solutions.count(), 2);
        }
        _ => panic!("expected solutions"),
    }
}

#[test]
fn test_attach_uncertainty_links_model_to_entity() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));
    let result = store
        .add_record(
            &RecordDraft::new(EntityKind::Result)
                .field(Field::Label, "binding energy")
                .field(Field::Value, "-42.1")
                .field(Field::Unit, "kcal/mol"),
            &[],
            Some(&agent()),
        )
        .unwrap();

    let model = store
        .attach_uncertainty(&result, UncertaintyNature::Aleatory, Some("shot noise"))
        .unwrap();

    let turtle = store.export_turtle().unwrap();
    let oxi = oxigraph::store::Store::new().unwrap();
    oxi.load_from_reader(oxigraph::io::RdfFormat::Turtle, turtle.as_bytes())
        .unwrap();
    let query = format!(
        "ASK {{ <{result}> <http://labtrace.io/ontology#hasUncertainty> <{model}> .
                <{model}> <http://labtrace.io/ontology#natureOfUncertainty> \"Aleatory\" }}",
        result = result,
        model = model
    );
    match oxi.query(&query).unwrap() {
        oxigraph::sparql::QueryResults::Boolean(b) => assert!(b),
        _ => panic!("expected boolean result"),
    }
}

#[test]
fn test_evidence_projection_ordered_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProvenanceStore::open(dir.path().join("project.ttl"));

    for i in 0..3 {
        store
            .add_evidence(
                &format!("finding {}", i),
                "cite",
                "doi:10.1/1",
                Some(&agent()),
                None,
            )
            .unwrap();
        // Distinct generatedAtTime values for a meaningful ordering.
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let records = store.evidence().unwrap();
    assert_eq!(records.len(), 3);
    let timestamps: Vec<&String> = records.iter().filter_map(|r| r.timestamp.as_ref()).collect();
    assert_eq!(timestamps.len(), 3);
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted, "descending generatedAtTime");
}
