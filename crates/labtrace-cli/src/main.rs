//! labtrace CLI - Main entry point.

use clap::Parser;
use labtrace_cli::commands;
use labtrace_cli::{Cli, CliError, Command, Config, Formatter};
use labtrace_domain::RecordUri;
use labtrace_store::ProvenanceStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> labtrace_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    // Project path: flag/env beats config
    let project_path = cli.project.unwrap_or(config.project_path);
    let store = ProvenanceStore::open(project_path);

    // Agent: flag beats config; absent means unattributed records
    let agent = cli
        .agent
        .or(config.agent)
        .map(|value| {
            RecordUri::parse(&value)
                .map_err(|e| CliError::InvalidInput(format!("agent: {}", e)))
        })
        .transpose()?;

    match cli.command {
        Command::Question(args) => {
            commands::execute_question(args, &store, agent.as_ref(), &formatter)?;
        }
        Command::Evidence(args) => {
            commands::execute_evidence(args, &store, agent.as_ref(), &formatter)?;
        }
        Command::Hypothesis(args) => {
            commands::execute_hypothesis(args, &store, agent.as_ref(), &formatter)?;
        }
        Command::Method(args) => {
            commands::execute_method(args, &store, agent.as_ref(), &formatter)?;
        }
        Command::List(args) => {
            commands::execute_list(args, &store, &formatter)?;
        }
        Command::Export => {
            commands::execute_export(&store)?;
        }
    }

    Ok(())
}
