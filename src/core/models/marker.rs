//! Marker patterns
//!
//! A marker is either the literal `TODO` (any case) or a ticket reference of
//! the form `PREFIX-<digits>`. The two rules are independent and combined
//! with OR; a line with both still counts once.

use regex::Regex;
use thiserror::Error;

/// Ticket prefix used when none is configured
pub const DEFAULT_TICKET_PREFIX: &str = "USGVINISPZ";

/// Literal marker matched case-insensitively
const TODO_LITERAL: &str = "todo";

/// Errors building a marker pattern
#[derive(Debug, Error)]
pub enum MarkerError {
    /// Prefix was empty
    #[error("ticket prefix must not be empty")]
    EmptyPrefix,

    /// Prefix contained something other than ASCII letters and digits
    #[error("ticket prefix must be alphanumeric: {0:?}")]
    InvalidPrefix(String),

    /// Regex compilation failed
    #[error("invalid ticket pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// The pair of marker rules applied to comment lines
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    prefix: String,
    ticket: Regex,
}

impl MarkerPattern {
    /// Build a pattern for the given ticket prefix
    pub fn new(prefix: &str) -> Result<Self, MarkerError> {
        if prefix.is_empty() {
            return Err(MarkerError::EmptyPrefix);
        }
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MarkerError::InvalidPrefix(prefix.to_string()));
        }
        let ticket = Regex::new(&format!(r"{}-\d+", regex::escape(prefix)))?;
        Ok(Self {
            prefix: prefix.to_string(),
            ticket,
        })
    }

    /// The configured ticket prefix
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the line contains `TODO` in any letter case
    #[must_use]
    pub fn has_todo(line: &str) -> bool {
        line.to_ascii_lowercase().contains(TODO_LITERAL)
    }

    /// Whether the line contains a ticket reference
    #[must_use]
    pub fn has_ticket(&self, line: &str) -> bool {
        self.ticket.is_match(line)
    }

    /// Whether either rule fires
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        Self::has_todo(line) || self.has_ticket(line)
    }
}
