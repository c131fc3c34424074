// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel register` command.

use crate::OutputFormatter;
use anyhow::Result;
use parcel_core::ClientId;
use std::path::Path;

/// Registers a new parcel and prints it.
///
/// # Arguments
///
/// * `data_dir` - The data directory
/// * `client` - The owning client
/// * `address` - The delivery address
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The data directory is not initialized
/// - The address is blank
/// - The store cannot be written
pub fn execute(
    data_dir: &Path,
    client: ClientId,
    address: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = super::open_service(data_dir)?;
    let parcel = service.register(client, address)?;

    println!("{}", formatter.format_parcel("register", &parcel));
    Ok(())
}
