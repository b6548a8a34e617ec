//! HTML reports
//!
//! Each report is a single self-contained document: title, generation time
//! and a File / Line / Comment table with one row per match.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::core::models::Match;

/// Timestamp format shown in reports
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const STYLE: &str = r"
html, body {
  width: 98%;
  background: white;
  font-family: Consolas, 'Bitstream Vera Sans Mono', monospace;
}
table.todo_report {
  table-layout: fixed;
  margin: 0 2%;
  width: 98%;
  border-collapse: collapse;
}
table.todo_report td, table.todo_report th {
  border: 1px solid black;
  padding: 2px;
  overflow: hidden;
  text-overflow: ellipsis;
  word-wrap: break-word;
  text-align: center;
}
table.todo_report tr:nth-child(even) {
  background: #E0E4F5;
}
table.todo_report thead {
  background: #0B6FA4;
  color: #FFFFFF;
}
";

/// Errors writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Destination directory could not be created
    #[error("cannot create report directory {path}: {source}")]
    CreateDir {
        /// Destination directory
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be written
    #[error("cannot write report {path}: {source}")]
    Write {
        /// Report file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// A report ready to be rendered
#[derive(Debug, Clone)]
pub struct HtmlReport<'a> {
    title: String,
    generated_at: DateTime<Local>,
    matches: &'a [Match],
}

impl<'a> HtmlReport<'a> {
    /// Create a report stamped with the current local time
    #[must_use]
    pub fn new(title: impl Into<String>, matches: &'a [Match]) -> Self {
        Self::at(title, matches, Local::now())
    }

    /// Create a report with a fixed timestamp
    #[must_use]
    pub fn at(title: impl Into<String>, matches: &'a [Match], generated_at: DateTime<Local>) -> Self {
        Self {
            title: title.into(),
            generated_at,
            matches,
        }
    }

    /// Render the full HTML document
    #[must_use]
    pub fn render(&self) -> String {
        let title = escape(&self.title);
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(html, "<style>{STYLE}</style>");
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(html, "<h1>TODO Report {title}</h1>");
        let _ = writeln!(
            html,
            "<p><b>Date: </b>{}</p>",
            self.generated_at.format(TIMESTAMP_FORMAT)
        );
        html.push_str("<table class=\"todo_report\">\n");
        html.push_str("<thead><tr><th>File</th><th>Line</th><th>Comment</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for m in self.matches {
            let _ = writeln!(
                html,
                "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&m.path.display().to_string()),
                m.line,
                escape(&m.text)
            );
        }
        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        html
    }
}

/// Render `matches` and write them to `destination/name`
///
/// The destination directory is created if needed. Returns the report path.
pub fn write_report(destination: &Path, name: &str, matches: &[Match]) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(destination).map_err(|source| ReportError::CreateDir {
        path: destination.to_path_buf(),
        source,
    })?;

    let path = destination.join(name);
    let html = HtmlReport::new(name, matches).render();
    fs::write(&path, html).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    log::info!("wrote {} row(s) to {}", matches.len(), path.display());
    Ok(path)
}

/// Escape text for use in HTML element content
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
