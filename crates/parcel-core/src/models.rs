// Rust guideline compliant 2026-10-16

//! Core data model for parcels.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned parcel identifier.
pub type ParcelNumber = u64;

/// Identifier of the client owning a parcel.
pub type ClientId = i64;

/// Status of a parcel in the delivery lifecycle.
///
/// Ordering follows the lifecycle: `Registered < Sent < Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Parcel is registered and not yet handed over for shipping.
    Registered,
    /// Parcel is in transit.
    Sent,
    /// Parcel reached its address. Terminal.
    Delivered,
}

impl Status {
    /// Returns the persisted name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Registered => "registered",
            Status::Sent => "sent",
            Status::Delivered => "delivered",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "registered" => Ok(Status::Registered),
            "sent" => Ok(Status::Sent),
            "delivered" => Ok(Status::Delivered),
            other => Err(crate::Error::InvalidParcel(format!(
                "Unknown status: {}",
                other
            ))),
        }
    }
}

/// A tracked parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-assigned number. Zero until the parcel is added to a store.
    pub number: ParcelNumber,
    /// Owning client.
    pub client: ClientId,
    /// Current lifecycle status.
    pub status: Status,
    /// Delivery address.
    pub address: String,
    /// Registration time, RFC3339 in UTC.
    pub created_at: String,
}

impl Parcel {
    /// Creates a new registered parcel stamped with the current UTC time.
    ///
    /// # Arguments
    ///
    /// * `client` - The owning client
    /// * `address` - The delivery address
    ///
    /// # Returns
    ///
    /// An unnumbered parcel ready to be added to a store.
    pub fn new(client: ClientId, address: String) -> Self {
        Self::with_created_at(client, address, Utc::now())
    }

    /// Creates a new registered parcel with an explicit registration time.
    pub fn with_created_at(client: ClientId, address: String, created_at: DateTime<Utc>) -> Self {
        Self {
            number: 0,
            client,
            status: Status::Registered,
            address,
            created_at: format_timestamp(created_at),
        }
    }

    /// Returns true while the address may change and the parcel may be deleted.
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.status.allows_mutation()
    }

    /// Validates the parcel data.
    ///
    /// # Returns
    ///
    /// Ok if the parcel is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The address is blank
    /// - `created_at` is not an RFC3339 timestamp
    pub fn validate(&self) -> crate::Result<()> {
        validate_address(&self.address)?;

        DateTime::parse_from_rfc3339(&self.created_at).map_err(|e| {
            crate::Error::InvalidParcel(format!(
                "created_at must be RFC3339, got {:?}: {}",
                self.created_at, e
            ))
        })?;

        Ok(())
    }
}

/// Checks that an address is usable for delivery.
///
/// # Errors
///
/// Returns an error if the address is empty or whitespace only.
pub fn validate_address(address: &str) -> crate::Result<()> {
    if address.trim().is_empty() {
        return Err(crate::Error::InvalidParcel(
            "Address cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Formats a timestamp the way parcels persist it, e.g. `2026-10-16T09:30:00Z`.
#[must_use]
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
