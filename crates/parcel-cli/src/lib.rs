// Rust guideline compliant 2026-10-16

//! Parcel CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;

pub use output::{create_formatter, MutationOutcome, OutputFormatter};
