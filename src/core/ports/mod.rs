//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! systems (filesystem, git). Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The scanner depends only on these traits, never on concrete
//! implementations. Tests substitute in-memory readers to exercise error
//! paths without touching file permissions.

mod source_reader;
mod vcs;

pub use source_reader::{DecodePolicy, ReadError, SourceReader};
pub use vcs::VersionControl;
