//! labtrace CLI - Command-line interface for the provenance fact store.
//!
//! Records research questions, evidence, hypotheses, and methods into a
//! project Turtle file and projects them back as tables or JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
