// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel advance` command.

use crate::OutputFormatter;
use anyhow::Result;
use parcel_core::ParcelNumber;
use std::path::Path;

/// Moves a parcel to its next status and prints the result.
///
/// Advancing a delivered parcel succeeds and reports `delivered` again.
///
/// # Errors
///
/// Returns an error if:
/// - The parcel does not exist
/// - Another writer changed the parcel during the call
/// - The store cannot be written
pub fn execute(data_dir: &Path, number: ParcelNumber, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(data_dir)?;
    let status = service.advance(number)?;

    println!("{}", formatter.format_status(number, status));
    Ok(())
}
