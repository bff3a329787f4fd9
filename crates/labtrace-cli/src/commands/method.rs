//! Method command - record an experimental method.

use crate::cli::MethodArgs;
use crate::error::Result;
use crate::output::Formatter;
use labtrace_domain::RecordUri;
use labtrace_store::ProvenanceStore;

/// Execute the method command.
pub fn execute_method(
    args: MethodArgs,
    store: &ProvenanceStore,
    agent: Option<&RecordUri>,
    formatter: &Formatter,
) -> Result<()> {
    let derived_from = args
        .derived_from
        .as_deref()
        .map(RecordUri::parse)
        .transpose()?;
    let uri = store.add_method(
        &args.label,
        args.method.as_deref(),
        &args.parameters,
        agent,
        derived_from.as_ref(),
    )?;
    println!("{}", formatter.format_added("ExperimentalMethod", &uri)?);
    Ok(())
}
