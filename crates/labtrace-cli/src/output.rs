//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use labtrace_domain::RecordUri;
use labtrace_store::{EntityRecord, EvidenceRecord};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of an add command.
    pub fn format_added(&self, kind: &str, uri: &RecordUri) -> Result<String> {
        match self.format {
            OutputFormat::Quiet => Ok(uri.as_str().to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "status": "success",
                "uri": uri.as_str(),
            }))?),
            OutputFormat::Table => Ok(format!(
                "{} {} {}",
                self.colorize("Recorded", "green"),
                kind,
                uri
            )),
        }
    }

    /// Format evidence records.
    pub fn format_evidence(&self, records: &[EvidenceRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.uri.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => self.format_evidence_table(records),
        }
    }

    /// Format generic entity records.
    pub fn format_records(&self, records: &[EntityRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.uri.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => self.format_records_table(records),
        }
    }

    fn format_evidence_table(&self, records: &[EvidenceRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No evidence recorded.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Label", "Citation", "Source", "Agent", "Recorded"]);

        for record in records {
            builder.push_record([
                record.label.as_deref().unwrap_or("-"),
                &record.citation,
                &record.source,
                record.agent.as_deref().unwrap_or("-"),
                record.timestamp.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn format_records_table(&self, records: &[EntityRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("Nothing recorded for this kind.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["URI", "Label", "Agent", "Recorded"]);

        for record in records {
            builder.push_record([
                record.uri.as_str(),
                record.label.as_deref().unwrap_or("-"),
                record.agent.as_deref().unwrap_or("-"),
                record.timestamp.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            _ => text.to_string(),
        }
    }
}
