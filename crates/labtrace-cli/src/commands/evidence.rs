//! Evidence command - record evidence from literature.

use crate::cli::EvidenceArgs;
use crate::error::Result;
use crate::output::Formatter;
use labtrace_domain::RecordUri;
use labtrace_store::ProvenanceStore;

/// Execute the evidence command.
pub fn execute_evidence(
    args: EvidenceArgs,
    store: &ProvenanceStore,
    agent: Option<&RecordUri>,
    formatter: &Formatter,
) -> Result<()> {
    let question = args
        .relates_to
        .as_deref()
        .map(RecordUri::parse)
        .transpose()?;
    let uri = store.add_evidence(
        &args.content,
        &args.citation,
        &args.source,
        agent,
        question.as_ref(),
    )?;
    println!("{}", formatter.format_added("Evidence", &uri)?);
    Ok(())
}
