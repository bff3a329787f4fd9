//! List command - project recorded entities of one kind.

use crate::cli::ListArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use labtrace_domain::EntityKind;
use labtrace_store::ProvenanceStore;

/// Execute the list command.
///
/// Evidence gets its full projection (content, citation, source); every
/// other kind lists the generic URI/label/agent columns.
pub fn execute_list(args: ListArgs, store: &ProvenanceStore, formatter: &Formatter) -> Result<()> {
    let kind: EntityKind = args.kind.parse().map_err(CliError::InvalidInput)?;

    let output = if kind == EntityKind::Evidence {
        formatter.format_evidence(&store.evidence()?)?
    } else {
        formatter.format_records(&store.records(kind)?)?
    };
    println!("{}", output);
    Ok(())
}
