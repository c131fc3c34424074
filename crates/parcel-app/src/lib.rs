// Rust guideline compliant 2026-10-16

//! Application services for the parcel tracker.
//!
//! This crate provides the lifecycle service built on a record store, data
//! directory handling, list filtering, and standardized response envelopes
//! shared by front ends.

pub mod data_dir;
pub mod error;
pub mod list;
pub mod response;
pub mod service;

pub use data_dir::{DataDir, DEFAULT_DATA_DIR};
pub use error::{AppError, ErrorCode, Result};
pub use list::{list_parcels, parse_sort_field, parse_status, ListOptions, SortField};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use service::{GuardMode, ParcelService};
