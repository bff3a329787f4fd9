//! Hypothesis command - record a testable claim.

use crate::cli::HypothesisArgs;
use crate::error::Result;
use crate::output::Formatter;
use labtrace_domain::RecordUri;
use labtrace_store::ProvenanceStore;

/// Execute the hypothesis command.
pub fn execute_hypothesis(
    args: HypothesisArgs,
    store: &ProvenanceStore,
    agent: Option<&RecordUri>,
    formatter: &Formatter,
) -> Result<()> {
    let derived_from: Vec<RecordUri> = args
        .derived_from
        .iter()
        .map(|uri| RecordUri::parse(uri))
        .collect::<std::result::Result<_, _>>()?;
    let uri = store.add_hypothesis(&args.label, agent, &derived_from)?;
    println!("{}", formatter.format_added("Hypothesis", &uri)?);
    Ok(())
}
