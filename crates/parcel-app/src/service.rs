// Rust guideline compliant 2026-10-16

//! Parcel lifecycle service.
//!
//! The service is the only legitimate entry point for status transitions. It
//! owns no state beyond its store handle; the store is the single source of
//! truth.

use crate::error::Result;
use parcel_core::fsm::ensure_mutable;
use parcel_core::{
    ClientId, Config, Error as CoreError, Parcel, ParcelNumber, ParcelStore, Status,
};

/// How address changes and deletions report a blocked guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardMode {
    /// Blocked calls succeed without changing anything.
    #[default]
    Silent,
    /// Blocked calls fail with `PreconditionFailed`, or `NotFound` for a
    /// missing parcel.
    Strict,
}

impl From<&Config> for GuardMode {
    fn from(config: &Config) -> Self {
        if config.strict_guards {
            GuardMode::Strict
        } else {
            GuardMode::Silent
        }
    }
}

/// Lifecycle rules on top of a [`ParcelStore`].
#[derive(Debug)]
pub struct ParcelService<S> {
    store: S,
    guard_mode: GuardMode,
}

impl<S: ParcelStore> ParcelService<S> {
    /// Creates a service with silent guards.
    pub fn new(store: S) -> Self {
        Self::with_guard_mode(store, GuardMode::Silent)
    }

    /// Creates a service with the given guard mode.
    pub fn with_guard_mode(store: S, guard_mode: GuardMode) -> Self {
        Self { store, guard_mode }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the active guard mode.
    pub fn guard_mode(&self) -> GuardMode {
        self.guard_mode
    }

    /// Registers a new parcel for `client`.
    ///
    /// # Arguments
    ///
    /// * `client` - The owning client
    /// * `address` - The delivery address
    ///
    /// # Returns
    ///
    /// The stored parcel, including its assigned number.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is blank or the store fails.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> Result<Parcel> {
        let mut parcel = Parcel::new(client, address.into());
        parcel.number = self.store.add(&parcel)?;

        tracing::info!(
            number = parcel.number,
            client = parcel.client,
            address = %parcel.address,
            created_at = %parcel.created_at,
            "parcel registered"
        );

        Ok(parcel)
    }

    /// Returns every parcel owned by `client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_by_client(&self, client: ClientId) -> Result<Vec<Parcel>> {
        Ok(self.store.get_by_client(client)?)
    }

    /// Returns the parcel with the given number.
    ///
    /// # Errors
    ///
    /// Returns an error if the parcel does not exist or the store fails.
    pub fn get(&self, number: ParcelNumber) -> Result<Parcel> {
        Ok(self.store.get(number)?)
    }

    /// Moves a parcel one step along `registered → sent → delivered`.
    ///
    /// Advancing a delivered parcel is a no-op. The write is conditional on
    /// the status read at the start of the call, so it can only ever move the
    /// parcel one step forward.
    ///
    /// # Returns
    ///
    /// The parcel's status after the call.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parcel does not exist
    /// - The parcel changed status or was deleted after it was read
    /// - The store fails
    pub fn advance(&self, number: ParcelNumber) -> Result<Status> {
        let current = self.store.get(number)?.status;

        if current.is_terminal() {
            tracing::debug!(number, status = %current, "parcel already delivered");
            return Ok(current);
        }

        let next = current.next();
        if !self.store.compare_and_set_status(number, current, next)? {
            tracing::warn!(number, expected = %current, "status changed during advance");
            return Err(CoreError::Conflict {
                number,
                expected: current,
            }
            .into());
        }

        tracing::info!(number, from = %current, to = %next, "parcel advanced");
        Ok(next)
    }

    /// Changes the delivery address of a registered parcel.
    ///
    /// In [`GuardMode::Silent`] a parcel that is missing or no longer
    /// registered is left untouched and the call still succeeds.
    ///
    /// # Returns
    ///
    /// Whether the stored address changed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The address is blank
    /// - The guard blocks the change in [`GuardMode::Strict`]
    /// - The store fails
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> Result<bool> {
        if self.store.set_address(number, address)? {
            tracing::info!(number, address, "parcel address changed");
            return Ok(true);
        }
        self.guard_blocked(number, "change_address")?;
        Ok(false)
    }

    /// Deletes a registered parcel.
    ///
    /// Guard behaviour matches [`ParcelService::change_address`]. Returns
    /// whether the parcel was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the guard blocks the deletion in
    /// [`GuardMode::Strict`] or the store fails.
    pub fn delete(&self, number: ParcelNumber) -> Result<bool> {
        if self.store.delete(number)? {
            tracing::info!(number, "parcel deleted");
            return Ok(true);
        }
        self.guard_blocked(number, "delete")?;
        Ok(false)
    }

    fn guard_blocked(&self, number: ParcelNumber, operation: &str) -> Result<()> {
        match self.guard_mode {
            GuardMode::Silent => {
                tracing::debug!(number, operation, "guarded mutation had no effect");
                Ok(())
            }
            GuardMode::Strict => {
                let parcel = self.store.get(number)?;
                ensure_mutable(&parcel)?;
                Ok(())
            }
        }
    }
}
