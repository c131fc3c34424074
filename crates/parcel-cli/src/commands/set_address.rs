// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel set-address` command.

use crate::{MutationOutcome, OutputFormatter};
use anyhow::Result;
use parcel_core::{ParcelNumber, Status};
use std::path::Path;

/// Changes the delivery address of a registered parcel.
///
/// A parcel that is already sent or delivered keeps its address; the
/// command reports that instead of failing, unless strict guards are
/// configured.
///
/// # Errors
///
/// Returns an error if:
/// - The parcel does not exist
/// - The address is blank
/// - Strict guards are configured and the parcel is not registered
/// - The store cannot be written
pub fn execute(
    data_dir: &Path,
    number: ParcelNumber,
    address: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = super::open_service(data_dir)?;

    let applied = service.change_address(number, &address)?;
    let status = if applied {
        Status::Registered
    } else {
        service.get(number)?.status
    };

    let outcome = MutationOutcome {
        action: "set_address",
        number,
        applied,
        status: Some(status),
    };

    println!("{}", formatter.format_outcome(&outcome));
    Ok(())
}
