// Rust guideline compliant 2026-10-16

//! Command implementations for the parcel CLI.

pub mod advance;
pub mod delete;
pub mod demo;
pub mod init;
pub mod list;
pub mod register;
pub mod set_address;
pub mod show;

use anyhow::Result;
use parcel_app::{DataDir, ParcelService};
use parcel_core::JsonlStore;
use std::path::Path;

/// Opens the service for an initialized data directory.
///
/// # Errors
///
/// Returns an error if the data directory is missing or its config is invalid.
pub(crate) fn open_service(data_dir: &Path) -> Result<ParcelService<JsonlStore>> {
    let (service, _config) = DataDir::discover(data_dir)?.open_service()?;
    Ok(service)
}
