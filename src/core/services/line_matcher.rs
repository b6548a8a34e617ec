//! Line matcher service - find marker comments in a file's lines
//!
//! Pure logic: the caller supplies the decoded lines and gets back the
//! 1-based numbers and text of every comment line carrying a marker.

use crate::core::models::{CommentGrammar, MarkerPattern};
use crate::core::services::classifier::{CommentMode, CommentTracker};

/// Find comment lines that carry a marker
///
/// Every line is fed to the classifier, even ones that do not match, so
/// block-aware mode sees the whole file.
#[must_use]
pub fn match_lines<'a, I>(
    lines: I,
    grammar: Option<CommentGrammar>,
    mode: CommentMode,
    markers: &MarkerPattern,
) -> Vec<(usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tracker = CommentTracker::new(grammar, mode);
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let is_comment = tracker.classify(line);
            (is_comment && markers.matches(line)).then_some((idx + 1, line))
        })
        .collect()
}
