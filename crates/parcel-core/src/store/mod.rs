// Rust guideline compliant 2026-10-16

//! Record stores for parcels.
//!
//! [`ParcelStore`] is the persistence contract the service layer is written
//! against. Guarded writes carry their precondition inside the write, so a
//! check and its update never observe different states.

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::{ClientId, Parcel, ParcelNumber, Result, Status};
use rayon::prelude::*;
use std::sync::Arc;

/// Durable keyed storage for parcel records.
pub trait ParcelStore: Send + Sync {
    /// Persists a new parcel and returns its store-assigned number.
    ///
    /// The input's `number` is ignored; every other field is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the parcel fails validation or the write fails.
    fn add(&self, parcel: &Parcel) -> Result<ParcelNumber>;

    /// Returns the parcel with the given number.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if no parcel has that number.
    fn get(&self, number: ParcelNumber) -> Result<Parcel>;

    /// Returns every parcel owned by `client`, ascending by number.
    ///
    /// An unknown client yields an empty vector.
    fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>>;

    /// Overwrites the status. Missing parcels are a silent no-op.
    fn set_status(&self, number: ParcelNumber, status: Status) -> Result<()>;

    /// Sets the status to `next` only if it currently equals `expected`.
    ///
    /// Returns whether the write happened.
    fn compare_and_set_status(
        &self,
        number: ParcelNumber,
        expected: Status,
        next: Status,
    ) -> Result<bool>;

    /// Overwrites the address only if the parcel is registered.
    ///
    /// Returns whether a record was changed. A missing or non-registered
    /// parcel is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is blank or the write fails.
    fn set_address(&self, number: ParcelNumber, address: &str) -> Result<bool>;

    /// Removes the parcel only if it is registered.
    ///
    /// Returns whether a record was removed.
    fn delete(&self, number: ParcelNumber) -> Result<bool>;
}

impl<S: ParcelStore + ?Sized> ParcelStore for Arc<S> {
    fn add(&self, parcel: &Parcel) -> Result<ParcelNumber> {
        (**self).add(parcel)
    }

    fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        (**self).get(number)
    }

    fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        (**self).get_by_client(client)
    }

    fn set_status(&self, number: ParcelNumber, status: Status) -> Result<()> {
        (**self).set_status(number, status)
    }

    fn compare_and_set_status(
        &self,
        number: ParcelNumber,
        expected: Status,
        next: Status,
    ) -> Result<bool> {
        (**self).compare_and_set_status(number, expected, next)
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> Result<bool> {
        (**self).set_address(number, address)
    }

    fn delete(&self, number: ParcelNumber) -> Result<bool> {
        (**self).delete(number)
    }
}

/// Keeps the parcels owned by `client`, preserving input order.
fn filter_by_client(parcels: Vec<Parcel>, client: ClientId) -> Vec<Parcel> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    if parcels.len() >= PARALLEL_THRESHOLD {
        parcels
            .into_par_iter()
            .filter(|p| p.client == client)
            .collect()
    } else {
        parcels.into_iter().filter(|p| p.client == client).collect()
    }
}
