//! Source reader port
//!
//! Defines how the scanner gets the lines of a file, including what happens
//! when the bytes are not valid UTF-8.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do with bytes that are not valid UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Substitute U+FFFD for malformed sequences and keep going
    #[default]
    Replace,
    /// Treat the file as unreadable
    Fail,
}

/// Errors reading a single source file
#[derive(Debug, Error)]
pub enum ReadError {
    /// File could not be opened or read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8 and the policy is [`DecodePolicy::Fail`]
    #[error("invalid UTF-8 in {path} at byte {offset}")]
    InvalidEncoding {
        /// File being read
        path: PathBuf,
        /// Offset of the first invalid byte
        offset: usize,
    },
}

/// Reads a source file into lines
///
/// Implementations must release the file before returning, on success and
/// on error alike.
pub trait SourceReader {
    /// The decoding policy in effect
    fn policy(&self) -> DecodePolicy;

    /// Read all lines of a file, without line terminators
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ReadError>;
}
