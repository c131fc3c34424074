// Rust guideline compliant 2026-10-16

//! Error types for the parcels core library.

use crate::models::{ParcelNumber, Status};
use thiserror::Error;

/// Result type alias for parcel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parcel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Store failure not covered by IO or JSON (lock poisoning, bad sequence file).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Parcel not found.
    #[error("Parcel not found: {0}")]
    NotFound(ParcelNumber),

    /// Invalid parcel data.
    #[error("Invalid parcel: {0}")]
    InvalidParcel(String),

    /// Invalid state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Status changed between the read and the conditional write.
    #[error("Parcel {number} is no longer {expected}")]
    Conflict {
        /// Parcel that was being advanced.
        number: ParcelNumber,
        /// Status observed before the write.
        expected: Status,
    },

    /// A guarded mutation was refused because of the parcel's status.
    #[error("Parcel {number} is {status}; only registered parcels can be changed")]
    PreconditionFailed {
        /// Parcel the mutation targeted.
        number: ParcelNumber,
        /// Status that blocked the mutation.
        status: Status,
    },

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for failures of the underlying store rather than of the request.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Json(_) | Error::Storage(_))
    }
}
