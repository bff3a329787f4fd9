//! Question command - record a research question.

use crate::cli::QuestionArgs;
use crate::error::Result;
use crate::output::Formatter;
use labtrace_domain::RecordUri;
use labtrace_store::ProvenanceStore;

/// Execute the question command.
pub fn execute_question(
    args: QuestionArgs,
    store: &ProvenanceStore,
    agent: Option<&RecordUri>,
    formatter: &Formatter,
) -> Result<()> {
    let uri = store.add_question(&args.label, agent)?;
    println!("{}", formatter.format_added("Question", &uri)?);
    Ok(())
}
