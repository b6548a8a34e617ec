//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::models::{Match, ScanResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scan run, including the reports written
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// Scanned root
    pub root: PathBuf,
    /// Ticket prefix in effect
    pub ticket_prefix: String,
    /// Number of files read
    pub files_scanned: usize,
    /// Number of files skipped because they could not be read
    pub files_skipped: usize,
    /// All matches
    pub matches: Vec<Match>,
    /// Matches in modified files
    pub modified_matches: Vec<Match>,
    /// Report written for all matches, if any
    pub report: Option<PathBuf>,
    /// Report written for modified matches, if any
    pub modified_report: Option<PathBuf>,
}

impl ScanReport {
    /// Assemble the run summary from a scan result
    #[must_use]
    pub fn new(root: PathBuf, ticket_prefix: &str, result: ScanResult) -> Self {
        Self {
            root,
            ticket_prefix: ticket_prefix.to_string(),
            files_scanned: result.files_scanned,
            files_skipped: result.files_skipped,
            matches: result.all_matches,
            modified_matches: result.modified_matches,
            report: None,
            modified_report: None,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }

    /// Human-readable text of the run
    #[must_use]
    pub fn to_human(&self) -> String {
        let prefix = &self.ticket_prefix;
        let mut out = String::new();

        if self.matches.is_empty() {
            let _ = writeln!(
                out,
                "There are no TODO or {prefix} comments found, ToDo Check is complete."
            );
            return out;
        }

        let _ = writeln!(out, "TODO or {prefix} comments found, results:");
        push_matches(&mut out, &self.matches);
        if let Some(path) = &self.report {
            let _ = writeln!(out, "HTML report: {}", path.display());
        }

        if self.modified_matches.is_empty() {
            let _ = writeln!(
                out,
                "There are no TODO or {prefix} comments found in the modified files, ToDo Check is complete."
            );
        } else {
            let _ = writeln!(
                out,
                "TODO or {prefix} comments found in modified files, please review the following comments:"
            );
            push_matches(&mut out, &self.modified_matches);
            if let Some(path) = &self.modified_report {
                let _ = writeln!(out, "HTML report for modified files: {}", path.display());
            }
        }
        out
    }

    /// Pretty JSON document of the run
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn push_matches(out: &mut String, matches: &[Match]) {
    for m in matches {
        let _ = writeln!(out, "{m}");
    }
}
