// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel delete` command.

use crate::{MutationOutcome, OutputFormatter};
use anyhow::Result;
use parcel_core::ParcelNumber;
use std::path::Path;

/// Deletes a registered parcel.
///
/// Sent and delivered parcels are kept; the command reports that instead of
/// failing, unless strict guards are configured.
///
/// # Errors
///
/// Returns an error if:
/// - The parcel does not exist
/// - Strict guards are configured and the parcel is not registered
/// - The store cannot be written
pub fn execute(data_dir: &Path, number: ParcelNumber, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = super::open_service(data_dir)?;

    let applied = service.delete(number)?;
    let status = if applied {
        None
    } else {
        Some(service.get(number)?.status)
    };

    let outcome = MutationOutcome {
        action: "delete",
        number,
        applied,
        status,
    };

    println!("{}", formatter.format_outcome(&outcome));
    Ok(())
}
