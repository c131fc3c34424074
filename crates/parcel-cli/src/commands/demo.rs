// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel demo` command.
//!
//! Walks one client through the whole lifecycle against an in-memory store:
//! a parcel is registered, re-addressed, sent, then refused a second address
//! change and a deletion, while a second parcel is registered and deleted.

use crate::OutputFormatter;
use anyhow::Result;
use parcel_app::{ParcelService, SuccessEnvelope};
use parcel_core::{ClientId, MemoryStore, Parcel};
use serde::Serialize;

const CLIENT: ClientId = 1;
const FIRST_ADDRESS: &str = "12 Harbour Road";
const SECOND_ADDRESS: &str = "7 Mill Lane";
const BLOCKED_ADDRESS: &str = "3 Station Square";

/// One step of the demo and the client's parcels afterwards.
#[derive(Debug, Serialize)]
pub struct DemoStep {
    /// What the step did.
    pub description: String,
    /// The client's parcels after the step.
    pub parcels: Vec<Parcel>,
}

/// Runs the demo scenario and returns its steps.
///
/// # Errors
///
/// Returns an error if any service call fails.
pub fn run(service: &ParcelService<MemoryStore>) -> Result<Vec<DemoStep>> {
    let mut steps = Vec::new();
    let mut record = |description: String| -> Result<()> {
        steps.push(DemoStep {
            description,
            parcels: service.list_by_client(CLIENT)?,
        });
        Ok(())
    };

    let first = service.register(CLIENT, FIRST_ADDRESS)?;
    record(format!("Registered parcel {} to {}", first.number, first.address))?;

    service.change_address(first.number, SECOND_ADDRESS)?;
    record(format!("Changed address of parcel {} to {}", first.number, SECOND_ADDRESS))?;

    let status = service.advance(first.number)?;
    record(format!("Parcel {} is now {}", first.number, status))?;

    let changed = service.change_address(first.number, BLOCKED_ADDRESS)?;
    record(format!(
        "Tried to change address of {} parcel {}; address {}",
        status,
        first.number,
        if changed { "changed" } else { "kept" }
    ))?;

    let deleted = service.delete(first.number)?;
    record(format!(
        "Tried to delete {} parcel {}; parcel {}",
        status,
        first.number,
        if deleted { "deleted" } else { "kept" }
    ))?;

    let second = service.register(CLIENT, FIRST_ADDRESS)?;
    record(format!("Registered parcel {} to {}", second.number, second.address))?;

    service.delete(second.number)?;
    record(format!("Deleted registered parcel {}", second.number))?;

    Ok(steps)
}

/// Runs the demo and prints every step.
///
/// # Errors
///
/// Returns an error if the scenario fails.
pub fn execute(json: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    let service = ParcelService::new(MemoryStore::new());
    let steps = run(&service)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&SuccessEnvelope::new("demo", &steps))?);
        return Ok(());
    }

    for step in &steps {
        println!("{}", step.description);
        println!("{}", formatter.format_list(CLIENT, &step.parcels));
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_core::Status;

    #[test]
    fn test_demo_ends_with_only_the_sent_parcel() {
        let service = ParcelService::new(MemoryStore::new());
        let steps = run(&service).unwrap();

        assert_eq!(steps.len(), 7);
        let last = &steps[6].parcels;
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].number, 1);
        assert_eq!(last[0].status, Status::Sent);
        assert_eq!(last[0].address, SECOND_ADDRESS);
        assert!(steps[3].description.ends_with("address kept"));
        assert!(steps[4].description.ends_with("parcel kept"));
    }
}
