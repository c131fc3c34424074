// Rust guideline compliant 2026-10-16

//! Output formatting module for the parcel CLI.
//!
//! This module formats parcels and command outcomes as JSON, tables, or
//! plain text.

use parcel_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use parcel_core::{ClientId, Parcel, ParcelNumber, Status};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Result of a guarded mutation.
///
/// A silent guard lets a blocked call succeed; `applied` tells the user
/// whether anything was written.
#[derive(Debug, Clone, Serialize)]
pub struct MutationOutcome {
    /// Command that ran, e.g. `delete`.
    pub action: &'static str,
    /// Parcel the command targeted.
    pub number: ParcelNumber,
    /// Whether stored data changed.
    pub applied: bool,
    /// Status after the call; `None` once the parcel is deleted.
    pub status: Option<Status>,
}

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a single parcel produced by `action` (`show` or `register`).
    fn format_parcel(&self, action: &'static str, parcel: &Parcel) -> String;

    /// Formats a client's parcels for display.
    fn format_list(&self, client: ClientId, parcels: &[Parcel]) -> String;

    /// Formats the status a parcel reached after an advance.
    fn format_status(&self, number: ParcelNumber, status: Status) -> String;

    /// Formats the outcome of an address change or deletion.
    fn format_outcome(&self, outcome: &MutationOutcome) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps results in the standard success and error envelopes.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_parcel(&self, action: &'static str, parcel: &Parcel) -> String {
        Self::render(&SuccessEnvelope::new(action, parcel))
    }

    fn format_list(&self, client: ClientId, parcels: &[Parcel]) -> String {
        Self::render(&SuccessEnvelope::new(
            "list",
            json!({
                "client": client,
                "parcels": parcels,
                "total": parcels.len(),
            }),
        ))
    }

    fn format_status(&self, number: ParcelNumber, status: Status) -> String {
        Self::render(&SuccessEnvelope::new(
            "advance",
            json!({ "number": number, "status": status }),
        ))
    }

    fn format_outcome(&self, outcome: &MutationOutcome) -> String {
        Self::render(&SuccessEnvelope::new(outcome.action, outcome))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match error.downcast_ref::<AppError>() {
            Some(app_error) => Self::render(&ErrorEnvelope::from_error(app_error)),
            None => json!({ "status": "error", "message": error.to_string() }).to_string(),
        }
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_parcel(&self, action: &'static str, parcel: &Parcel) -> String {
        let mut output = String::new();

        if action == "register" {
            output.push_str("Registered parcel\n");
        }

        output.push_str(&format!("Number:   {}\n", parcel.number));
        output.push_str(&format!("Client:   {}\n", parcel.client));
        output.push_str(&format!("Status:   {}\n", parcel.status));
        output.push_str(&format!("Address:  {}\n", parcel.address));
        output.push_str(&format!("Created:  {}\n", parcel.created_at));

        output
    }

    fn format_list(&self, client: ClientId, parcels: &[Parcel]) -> String {
        if parcels.is_empty() {
            return format!("No parcels for client {}.", client);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Number", "Status", "Address", "Created"]);

        for parcel in parcels {
            builder.push_record(vec![
                parcel.number.to_string(),
                parcel.status.to_string(),
                parcel.address.clone(),
                parcel.created_at.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!("Parcels of client {}:\n{}", client, table)
    }

    fn format_status(&self, number: ParcelNumber, status: Status) -> String {
        format!("Parcel {} is now {}", number, status)
    }

    fn format_outcome(&self, outcome: &MutationOutcome) -> String {
        let verb = match outcome.action {
            "delete" => "deleted",
            _ => "updated",
        };
        match (outcome.applied, outcome.status) {
            (true, _) => format!("Parcel {} {}", outcome.number, verb),
            (false, Some(status)) => format!(
                "Parcel {} not {}: it is {} and only registered parcels can change",
                outcome.number, verb, status
            ),
            (false, None) => format!("Parcel {} not {}", outcome.number, verb),
        }
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// One record per line, space separated, for scripting.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_parcel(&self, _action: &'static str, parcel: &Parcel) -> String {
        format!(
            "{} {} {} {} {}",
            parcel.number, parcel.client, parcel.status, parcel.created_at, parcel.address
        )
    }

    fn format_list(&self, _client: ClientId, parcels: &[Parcel]) -> String {
        parcels
            .iter()
            .map(|parcel| self.format_parcel("list", parcel))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_status(&self, number: ParcelNumber, status: Status) -> String {
        format!("{} {}", number, status)
    }

    fn format_outcome(&self, outcome: &MutationOutcome) -> String {
        let status = outcome
            .status
            .map(|status| status.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("{} {} {}", outcome.number, outcome.applied, status)
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// Unknown formats fall back to the table formatter.
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}
