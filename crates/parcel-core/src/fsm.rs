// Rust guideline compliant 2026-10-16

//! Finite State Machine module for parcel status transitions.
//!
//! The lifecycle is linear:
//!
//! - Registered → Sent
//! - Sent → Delivered
//! - Delivered → Delivered (terminal self-loop, no write)
//!
//! Address changes and deletion are only allowed while Registered.

use crate::{Error, Parcel, Result, Status};

impl Status {
    /// Returns the status an advance moves to.
    ///
    /// `Delivered` maps to itself.
    #[must_use]
    pub fn next(&self) -> Status {
        match self {
            Status::Registered => Status::Sent,
            Status::Sent => Status::Delivered,
            Status::Delivered => Status::Delivered,
        }
    }

    /// Returns true if no further transition changes the status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        *self == Status::Delivered
    }

    /// Returns true if address changes and deletion are allowed.
    #[must_use]
    pub fn allows_mutation(&self) -> bool {
        *self == Status::Registered
    }

    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Returns
    ///
    /// Ok if the transition is valid, Err with descriptive message otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition regresses, skips `Sent`, or leaves
    /// `Delivered`.
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        if self.next() == target {
            return Ok(());
        }

        if self.is_terminal() {
            return Err(Error::InvalidTransition(format!(
                "Parcel is {} and can no longer change status",
                self
            )));
        }

        Err(Error::InvalidTransition(format!(
            "Cannot transition from {} to {}",
            self, target
        )))
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<Status> {
        if self.is_terminal() {
            Vec::new()
        } else {
            vec![self.next()]
        }
    }
}

/// Validates a status change for a parcel.
///
/// # Arguments
///
/// * `parcel` - The parcel to transition
/// * `new_status` - The target status
///
/// # Errors
///
/// Returns an error if the transition violates the lifecycle.
pub fn validate_transition(parcel: &Parcel, new_status: Status) -> Result<()> {
    parcel.status.can_transition_to(new_status)
}

/// Checks that a guarded mutation may touch the parcel.
///
/// # Errors
///
/// Returns [`Error::PreconditionFailed`] unless the parcel is registered.
pub fn ensure_mutable(parcel: &Parcel) -> Result<()> {
    if parcel.is_mutable() {
        Ok(())
    } else {
        Err(Error::PreconditionFailed {
            number: parcel.number,
            status: parcel.status,
        })
    }
}
