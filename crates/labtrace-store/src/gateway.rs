//! Graph persistence gateway: load-union-write on a Turtle file
//!
//! The persisted graph is append-only: a write is the set union of the
//! file's triples and the new ones, so prior content is never deleted and
//! duplicate triples collapse. Single-writer access is assumed; two
//! processes racing on one path are last-write-wins at the file level.

use crate::{vocab, StoreError};
use oxigraph::io::{RdfFormat, RdfSerializer};
use oxigraph::model::{GraphNameRef, Quad};
use oxigraph::store::Store;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Union the quads into the graph at `path` and write it back.
///
/// Missing file: the quads become the entire file. Existing file: parsed,
/// unioned, overwritten. A file that fails to parse aborts the call with
/// [`StoreError::CorruptGraph`] before anything is written, leaving the
/// original bytes untouched.
pub fn persist(path: &Path, quads: &[Quad]) -> Result<(), StoreError> {
    let store = match load(path)? {
        Some(store) => store,
        None => new_store()?,
    };

    for quad in quads {
        store
            .insert(quad)
            .map_err(|e| StoreError::Graph(e.to_string()))?;
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let serialized = serialize(&store)?;
    fs::write(path, &serialized)?;
    debug!(path = %path.display(), quads = quads.len(), "graph persisted");
    Ok(())
}

/// Load the graph at `path` into a fresh in-memory store.
///
/// Returns `Ok(None)` when no file exists; "no project yet" is a normal
/// state, not an error.
pub fn load(path: &Path) -> Result<Option<Store>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let store = new_store()?;
    store
        .load_from_reader(RdfFormat::Turtle, content.as_bytes())
        .map_err(|e| StoreError::CorruptGraph {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(Some(store))
}

/// Serialize the store's default graph as Turtle with the project prefixes.
pub fn serialize(store: &Store) -> Result<Vec<u8>, StoreError> {
    let serializer = turtle_serializer()?;
    store
        .dump_graph_to_writer(GraphNameRef::DefaultGraph, serializer, Vec::new())
        .map_err(|e| StoreError::Graph(e.to_string()))
}

pub(crate) fn new_store() -> Result<Store, StoreError> {
    Store::new().map_err(|e| StoreError::Graph(e.to_string()))
}

fn turtle_serializer() -> Result<RdfSerializer, StoreError> {
    RdfSerializer::from_format(RdfFormat::Turtle)
        .with_prefix("labtrace", vocab::NS_LABTRACE)
        .and_then(|s| s.with_prefix("prov", vocab::NS_PROV))
        .and_then(|s| s.with_prefix("dcterms", vocab::NS_DCTERMS))
        .and_then(|s| s.with_prefix("rdfs", vocab::NS_RDFS))
        .and_then(|s| s.with_prefix("xsd", vocab::NS_XSD))
        .map_err(|e| StoreError::Graph(e.to_string()))
}
