// Rust guideline compliant 2026-10-16

//! In-memory record store.

use super::{filter_by_client, ParcelStore};
use crate::models::validate_address;
use crate::{ClientId, Error, Parcel, ParcelNumber, Result, Status};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Record store backed by an ordered map keyed by parcel number.
///
/// Every operation runs under a single mutex, so guarded writes are atomic.
/// Contents live as long as the store value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Last number handed out; never decreases so numbers are not reused.
    last_number: ParcelNumber,
    rows: BTreeMap<ParcelNumber, Parcel>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored parcels.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.rows.len())
    }

    /// Returns true if no parcels are stored.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.rows.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))
    }
}

impl ParcelStore for MemoryStore {
    fn add(&self, parcel: &Parcel) -> Result<ParcelNumber> {
        parcel.validate()?;

        let mut inner = self.lock()?;
        inner.last_number += 1;
        let number = inner.last_number;

        let mut stored = parcel.clone();
        stored.number = number;
        inner.rows.insert(number, stored);

        Ok(number)
    }

    fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        self.lock()?
            .rows
            .get(&number)
            .cloned()
            .ok_or(Error::NotFound(number))
    }

    fn get_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        let rows: Vec<Parcel> = self.lock()?.rows.values().cloned().collect();
        Ok(filter_by_client(rows, client))
    }

    fn set_status(&self, number: ParcelNumber, status: Status) -> Result<()> {
        if let Some(parcel) = self.lock()?.rows.get_mut(&number) {
            parcel.status = status;
        }
        Ok(())
    }

    fn compare_and_set_status(
        &self,
        number: ParcelNumber,
        expected: Status,
        next: Status,
    ) -> Result<bool> {
        match self.lock()?.rows.get_mut(&number) {
            Some(parcel) if parcel.status == expected => {
                parcel.status = next;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> Result<bool> {
        validate_address(address)?;

        match self.lock()?.rows.get_mut(&number) {
            Some(parcel) if parcel.is_mutable() => {
                parcel.address = address.to_string();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn delete(&self, number: ParcelNumber) -> Result<bool> {
        let mut inner = self.lock()?;
        let eligible = inner
            .rows
            .get(&number)
            .is_some_and(|parcel| parcel.is_mutable());
        if eligible {
            inner.rows.remove(&number);
        }
        Ok(eligible)
    }
}
