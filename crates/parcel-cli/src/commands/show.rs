// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel show` command.

use crate::OutputFormatter;
use anyhow::Result;
use parcel_core::ParcelNumber;
use std::path::Path;

/// Prints a single parcel.
///
/// # Errors
///
/// Returns an error if the parcel does not exist or the store cannot be read.
pub fn execute(data_dir: &Path, number: ParcelNumber, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(data_dir)?;
    let parcel = service.get(number)?;

    println!("{}", formatter.format_parcel("show", &parcel));
    Ok(())
}
