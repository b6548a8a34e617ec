//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fs/` - Reading source files from disk
//! - `git/` - Staged file detection

pub mod fs;
pub mod git;

pub use fs::FsSourceReader;
pub use git::GitVersionControl;
