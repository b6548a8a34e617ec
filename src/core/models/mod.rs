//! Domain models for todocheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`FileType`] / [`CommentGrammar`] - Which lines count as comments
//! - [`MarkerPattern`] - TODO literal and ticket reference rules
//! - [`Match`] / [`ScanResult`] - What a scan found
//! - [`ModifiedFiles`] - Externally supplied set of changed files

mod file_type;
mod marker;
mod matched;
mod modified;

pub use file_type::{CommentGrammar, FileType, JENKINSFILE_PREFIX};
pub use marker::{DEFAULT_TICKET_PREFIX, MarkerError, MarkerPattern};
pub use matched::{Match, ScanResult};
pub use modified::ModifiedFiles;
