// Rust guideline compliant 2026-10-16

//! Parcels Core Library
//!
//! This crate provides the foundational components for the parcel tracker:
//! - Data model (Parcel, Status)
//! - Status FSM (transition table, mutation guards)
//! - Record stores (in-memory and JSONL file-backed)
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod fsm;
pub mod models;
pub mod store;

pub use config::{Config, OutputFormat, CONFIG_FILE};
pub use error::{Error, Result};
pub use fsm::validate_transition;
pub use models::{ClientId, Parcel, ParcelNumber, Status};
pub use store::{JsonlStore, MemoryStore, ParcelStore};
