//! Comment classifier - decides whether a line is a comment
//!
//! The default mode judges every line on its own by its leading prefix.
//! [`CommentMode::BlockAware`] additionally follows `/* ... */` blocks across
//! lines so that un-starred continuation lines are recognised.

use serde::{Deserialize, Serialize};

use crate::core::models::CommentGrammar;

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "//";

/// How comment lines are recognised within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMode {
    /// Each line is classified independently by its prefix
    #[default]
    PerLine,
    /// Lines inside an open `/* ... */` block also count as comments
    BlockAware,
}

impl std::fmt::Display for CommentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerLine => write!(f, "per-line"),
            Self::BlockAware => write!(f, "block-aware"),
        }
    }
}

impl std::str::FromStr for CommentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "per-line" => Ok(Self::PerLine),
            "block-aware" => Ok(Self::BlockAware),
            _ => Err(format!("Invalid comment mode: {s}. Use: per-line, block-aware")),
        }
    }
}

/// Check if a line is a comment under the given grammar
///
/// Surrounding whitespace is ignored; only the prefix matters. A file with
/// no grammar never has comment lines.
#[must_use]
pub fn is_comment_line(line: &str, grammar: Option<CommentGrammar>) -> bool {
    let Some(grammar) = grammar else {
        return false;
    };
    let trimmed = line.trim();
    grammar.prefixes().iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Per-file classifier state
///
/// In [`CommentMode::PerLine`] this is a thin wrapper over
/// [`is_comment_line`]. Create one tracker per file.
#[derive(Debug, Clone, Copy)]
pub struct CommentTracker {
    grammar: Option<CommentGrammar>,
    mode: CommentMode,
    in_block: bool,
}

impl CommentTracker {
    /// Start a file in code state
    #[must_use]
    pub const fn new(grammar: Option<CommentGrammar>, mode: CommentMode) -> Self {
        Self {
            grammar,
            mode,
            in_block: false,
        }
    }

    /// Whether the tracker is inside an unterminated block comment
    #[must_use]
    pub const fn in_block(&self) -> bool {
        self.in_block
    }

    /// Classify the next line of the file
    pub fn classify(&mut self, line: &str) -> bool {
        let by_prefix = is_comment_line(line, self.grammar);
        if self.mode == CommentMode::PerLine {
            return by_prefix;
        }
        let Some(grammar) = self.grammar else {
            return false;
        };
        if !grammar.has_block_comments() {
            return by_prefix;
        }

        let started_in_block = self.in_block;
        let trimmed = line.trim();
        let code = if !started_in_block && grammar == CommentGrammar::SlashStyle {
            strip_line_comment(trimmed)
        } else {
            trimmed
        };
        self.in_block = next_block_state(code, started_in_block);
        started_in_block || by_prefix
    }
}

/// Cut a line at a `//` that comes before any `/*`
fn strip_line_comment(line: &str) -> &str {
    match (line.find(LINE_COMMENT), line.find(BLOCK_OPEN)) {
        (Some(slash), Some(open)) if slash < open => &line[..slash],
        (Some(slash), None) => &line[..slash],
        _ => line,
    }
}

/// Block state after a line, decided by its last block token
fn next_block_state(line: &str, in_block: bool) -> bool {
    match (line.rfind(BLOCK_OPEN), line.rfind(BLOCK_CLOSE)) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => in_block,
    }
}
