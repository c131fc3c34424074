// Rust guideline compliant 2026-10-16

//! Listing and filtering helpers for parcels.

use crate::error::{AppError, Result};
use parcel_core::{Parcel, Status};

/// List options for filtering and sorting a client's parcels.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Sort field override.
    pub sort: Option<SortField>,
}

/// Field a listing can be ordered by. Ties fall back to the parcel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Ascending parcel number.
    #[default]
    Number,
    /// Registration time, oldest first.
    CreatedAt,
    /// Lifecycle order: registered, sent, delivered.
    Status,
    /// Address, lexicographic.
    Address,
}

/// Parses a status string into a `Status` value.
///
/// # Errors
///
/// Returns an error if the status is unknown.
pub fn parse_status(value: &str) -> Result<Status> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid status filter: {}", value)))
}

/// Parses a sort field name.
///
/// # Errors
///
/// Returns an error if the field is not one of `number`, `created_at`,
/// `status` or `address`.
pub fn parse_sort_field(value: &str) -> Result<SortField> {
    match value.trim().to_lowercase().as_str() {
        "number" => Ok(SortField::Number),
        "created_at" => Ok(SortField::CreatedAt),
        "status" => Ok(SortField::Status),
        "address" => Ok(SortField::Address),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid sort field: {} (expected number, created_at, status or address)",
            value
        ))),
    }
}

/// Filters and sorts parcels based on `ListOptions`.
///
/// Without a sort override parcels are ordered by ascending number.
pub fn list_parcels(parcels: Vec<Parcel>, options: &ListOptions) -> Vec<Parcel> {
    let mut parcels: Vec<Parcel> = match options.status {
        Some(status) => parcels.into_iter().filter(|p| p.status == status).collect(),
        None => parcels,
    };

    match options.sort.unwrap_or_default() {
        SortField::Number => parcels.sort_by_key(|p| p.number),
        SortField::CreatedAt => parcels.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.number.cmp(&b.number))
        }),
        SortField::Status => parcels.sort_by_key(|p| (p.status, p.number)),
        SortField::Address => parcels.sort_by(|a, b| {
            a.address
                .cmp(&b.address)
                .then(a.number.cmp(&b.number))
        }),
    }

    parcels
}
