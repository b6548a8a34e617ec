//! Filesystem source reader
//!
//! Implements `SourceReader` by reading the whole file into memory. The
//! handle is closed inside `fs::read` before decoding starts.

use std::fs;
use std::path::Path;

use crate::core::ports::{DecodePolicy, ReadError, SourceReader};

/// Reads source files from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader {
    policy: DecodePolicy,
}

impl FsSourceReader {
    /// Create a reader with an explicit decoding policy
    #[must_use]
    pub const fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }
}

impl SourceReader for FsSourceReader {
    fn policy(&self) -> DecodePolicy {
        self.policy
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ReadError> {
        let bytes = fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode(bytes, self.policy, path)?;
        Ok(split_lines(&text))
    }
}

/// Split on `\r\n`, `\n` and a lone `\r`, dropping the terminators
fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(String::from)
        .collect()
}

fn decode(bytes: Vec<u8>, policy: DecodePolicy, path: &Path) -> Result<String, ReadError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => match policy {
            DecodePolicy::Replace => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            DecodePolicy::Fail => Err(ReadError::InvalidEncoding {
                path: path.to_path_buf(),
                offset: e.utf8_error().valid_up_to(),
            }),
        },
    }
}
