//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// labtrace CLI - Record and inspect research provenance graphs.
#[derive(Debug, Parser)]
#[command(name = "labtrace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project Turtle file (overrides config)
    #[arg(short, long, global = true, env = "LABTRACE_PROJECT")]
    pub project: Option<String>,

    /// Agent URI to attribute records to (overrides config)
    #[arg(short, long, global = true)]
    pub agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (URIs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a research question
    Question(QuestionArgs),

    /// Record evidence from literature
    Evidence(EvidenceArgs),

    /// Record a testable hypothesis
    Hypothesis(HypothesisArgs),

    /// Record an experimental method
    Method(MethodArgs),

    /// List recorded entities of one kind
    List(ListArgs),

    /// Export the whole graph as Turtle
    Export,
}

/// Arguments for the question command.
#[derive(Debug, Parser)]
pub struct QuestionArgs {
    /// The question text
    pub label: String,
}

/// Arguments for the evidence command.
#[derive(Debug, Parser)]
pub struct EvidenceArgs {
    /// Summary of the finding extracted from the source
    pub content: String,

    /// Formatted bibliographic citation
    #[arg(short, long)]
    pub citation: String,

    /// DOI or URL of the source publication
    #[arg(short, long)]
    pub source: String,

    /// URI of the question this evidence addresses
    #[arg(short = 'q', long)]
    pub relates_to: Option<String>,
}

/// Arguments for the hypothesis command.
#[derive(Debug, Parser)]
pub struct HypothesisArgs {
    /// The hypothesis statement
    pub label: String,

    /// URIs of supporting evidence or premises
    #[arg(short, long)]
    pub derived_from: Vec<String>,
}

/// Arguments for the method command.
#[derive(Debug, Parser)]
pub struct MethodArgs {
    /// Short name of the method
    pub label: String,

    /// Methodology description (e.g. "GAMESS MRCI")
    #[arg(short, long)]
    pub method: Option<String>,

    /// Configured parameters as name=value strings
    #[arg(short = 'P', long = "parameter")]
    pub parameters: Vec<String>,

    /// URI of the hypothesis the method was designed for
    #[arg(short, long)]
    pub derived_from: Option<String>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Entity kind to list (question, evidence, hypothesis, method, ...)
    #[arg(default_value = "evidence")]
    pub kind: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_question_command() {
        let cli = Cli::parse_from(["labtrace", "question", "Does X inhibit Y?"]);
        match cli.command {
            Command::Question(args) => assert_eq!(args.label, "Does X inhibit Y?"),
            _ => panic!("Expected Question command"),
        }
    }

    #[test]
    fn test_evidence_command_flags() {
        let cli = Cli::parse_from([
            "labtrace",
            "evidence",
            "X binds the Y active site",
            "--citation",
            "Doe et al. 2024",
            "--source",
            "doi:10.1000/xyz",
            "-q",
            "http://labtrace.io/record/question/abc",
        ]);
        match cli.command {
            Command::Evidence(args) => {
                assert_eq!(args.citation, "Doe et al. 2024");
                assert!(args.relates_to.is_some());
            }
            _ => panic!("Expected Evidence command"),
        }
    }

    #[test]
    fn test_list_defaults_to_evidence() {
        let cli = Cli::parse_from(["labtrace", "list"]);
        match cli.command {
            Command::List(args) => assert_eq!(args.kind, "evidence"),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_repeatable_parameters() {
        let cli = Cli::parse_from([
            "labtrace", "method", "MRCI scan", "-P", "basis_set=cc-pVQZ", "-P", "charge=0",
        ]);
        match cli.command {
            Command::Method(args) => assert_eq!(args.parameters.len(), 2),
            _ => panic!("Expected Method command"),
        }
    }
}
