//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`classifier`] - Decide whether a line is a comment
//! - [`line_matcher`] - Combine the classifier with the marker rules

pub mod classifier;
pub mod line_matcher;

pub use classifier::{CommentMode, CommentTracker, is_comment_line};
pub use line_matcher::match_lines;
