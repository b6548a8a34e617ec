//! Version control system port
//!
//! Defines where the modified file set comes from when it is not given
//! explicitly.

use std::path::Path;

use crate::core::models::ModifiedFiles;

/// Version control system abstraction
pub trait VersionControl {
    /// Files staged for commit, relative to `root`
    fn staged_files(&self, root: &Path) -> anyhow::Result<ModifiedFiles>;
}
