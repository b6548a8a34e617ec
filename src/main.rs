//! todocheck - Find TODO and ticket markers in source comments
//!
//! Scans a source tree, prints every comment line that carries a marker and
//! writes HTML reports for the whole tree and for the modified files.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the todocheck CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
