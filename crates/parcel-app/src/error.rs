// Rust guideline compliant 2026-10-16

//! Error handling for parcel application services.

use parcel_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested parcel was not found.
    NotFound,
    /// The underlying store failed to read or write.
    StorageError,
    /// A guarded mutation was refused because of the parcel's status.
    PreconditionFailed,
    /// The parcel changed between read and conditional write.
    Conflict,
    /// The requested status change is not in the lifecycle.
    InvalidTransition,
    /// Parcel data failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// The data directory has not been initialized.
    NotInitialized,
    /// Configuration is invalid.
    ConfigError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data directory is missing.
    #[error("Parcel data directory not initialized at {path}. Run 'parcel init' first.")]
    DataDirNotInitialized {
        /// Path where the data directory was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DataDirNotInitialized { .. } => ErrorCode::NotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::StorageError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::PreconditionFailed { .. } => ErrorCode::PreconditionFailed,
                CoreError::Conflict { .. } => ErrorCode::Conflict,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidParcel(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) | CoreError::Json(_) | CoreError::Storage(_) => {
                    ErrorCode::StorageError
                }
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::DataDirNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(number)) => Some(serde_json::json!({
                "number": number,
            })),
            AppError::Core(CoreError::PreconditionFailed { number, status }) => {
                Some(serde_json::json!({
                    "number": number,
                    "status": status,
                }))
            }
            AppError::Core(CoreError::Conflict { number, expected }) => Some(serde_json::json!({
                "number": number,
                "expected": expected,
            })),
            _ => None,
        }
    }
}
