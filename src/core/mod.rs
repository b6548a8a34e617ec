//! Core domain logic for todocheck
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`FileType`, `MarkerPattern`, `Match`, `ScanResult`)
//! - `services/` - Comment classification and line matching
//! - `ports/` - Trait definitions for file reading and version control

pub mod models;
pub mod ports;
pub mod services;
