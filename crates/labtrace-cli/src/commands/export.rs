//! Export command - dump the graph as Turtle.

use crate::error::Result;
use labtrace_store::ProvenanceStore;

/// Execute the export command.
///
/// Prints the whole graph in Turtle to stdout; a missing project file
/// exports as the empty graph.
pub fn execute_export(store: &ProvenanceStore) -> Result<()> {
    let turtle = store.export_turtle()?;
    print!("{}", turtle);
    Ok(())
}
