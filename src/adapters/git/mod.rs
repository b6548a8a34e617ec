//! Git integration adapter
//!
//! Implements the `VersionControl` trait using git commands.
//!
//! - [`staging`] - Staged file detection

pub mod staging;

use std::path::Path;

use crate::core::models::ModifiedFiles;
use crate::core::ports::VersionControl;

pub use staging::get_staged_files;

/// Git-based version control implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVersionControl;

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VersionControl for GitVersionControl {
    fn staged_files(&self, root: &Path) -> anyhow::Result<ModifiedFiles> {
        let files = get_staged_files(root)?;
        log::debug!("git reports {} staged file(s) under {}", files.len(), root.display());
        Ok(files.into_iter().collect())
    }
}
