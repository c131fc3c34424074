// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel list` command.

use crate::OutputFormatter;
use anyhow::Result;
use parcel_app::{list_parcels, parse_sort_field, parse_status, ListOptions};
use parcel_core::ClientId;
use std::path::Path;

/// Lists a client's parcels with optional filtering and sorting.
///
/// # Arguments
///
/// * `data_dir` - The data directory
/// * `client` - The owning client
/// * `status_filter` - Optional status filter
/// * `sort_field` - Optional field to sort by
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The data directory is not initialized
/// - The status filter or sort field is unknown
/// - The store cannot be read
pub fn execute(
    data_dir: &Path,
    client: ClientId,
    status_filter: Option<String>,
    sort_field: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let service = super::open_service(data_dir)?;

    let options = ListOptions {
        status: status_filter.as_deref().map(parse_status).transpose()?,
        sort: sort_field.as_deref().map(parse_sort_field).transpose()?,
    };
    let parcels = list_parcels(service.list_by_client(client)?, &options);

    println!("{}", formatter.format_list(client, &parcels));
    Ok(())
}
