//! Scan results
//!
//! A [`Match`] records one comment line carrying a marker. A [`ScanResult`]
//! holds every match of a run plus the subset found in modified files.

use std::path::PathBuf;

use serde::Serialize;

/// One comment line that satisfied a marker rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Path as walked (scan root joined with the relative path)
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated
    pub relative_path: String,
    /// 1-based line number
    pub line: usize,
    /// Line text with surrounding whitespace trimmed
    pub text: String,
}

impl Match {
    /// Create a match, trimming the line text
    #[must_use]
    pub fn new(path: PathBuf, relative_path: String, line: usize, text: &str) -> Self {
        Self {
            path,
            relative_path,
            line,
            text: text.trim().to_string(),
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.text)
    }
}

/// Outcome of a full tree scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Every match, in traversal order then line order
    pub all_matches: Vec<Match>,
    /// Matches whose file is in the modified set, same relative order
    pub modified_matches: Vec<Match>,
    /// Number of eligible files read
    pub files_scanned: usize,
    /// Number of eligible files skipped because they could not be read
    pub files_skipped: usize,
}

impl ScanResult {
    /// Record a match, also adding it to the modified subset when flagged
    pub fn push(&mut self, m: Match, modified: bool) {
        if modified {
            self.modified_matches.push(m.clone());
        }
        self.all_matches.push(m);
    }
}
