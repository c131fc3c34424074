// Rust guideline compliant 2026-10-16

//! Parcel CLI Application
//!
//! Command-line interface for the parcel tracker.

use clap::Parser;
use parcel_app::{DataDir, DEFAULT_DATA_DIR};
use parcel_cli::{commands, create_formatter, logging, OutputFormatter};
use parcel_core::{ClientId, OutputFormat as ConfigFormat, ParcelNumber};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "parcel",
    version,
    about = "Parcel tracker: register, send and deliver parcels",
    after_help = "Examples:\n  parcel init\n  parcel register 1 \"12 Harbour Road\"\n  parcel advance 1\n  parcel list 1 --status sent\n  parcel set-address 1 \"7 Mill Lane\"\n  parcel delete 1\n"
)]
struct Cli {
    /// Data directory holding the store and config.toml
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a parcel data directory
    Init,

    /// Register a new parcel
    Register {
        /// Owning client
        client: ClientId,

        /// Delivery address
        address: String,
    },

    /// List a client's parcels
    List {
        /// Owning client
        client: ClientId,

        /// Filter by status (registered, sent, delivered)
        #[arg(long)]
        status: Option<String>,

        /// Sort by field (number, created_at, status, address)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show a parcel
    Show {
        /// Parcel number
        number: ParcelNumber,
    },

    /// Move a parcel to its next status
    Advance {
        /// Parcel number
        number: ParcelNumber,
    },

    /// Change the address of a registered parcel
    SetAddress {
        /// Parcel number
        number: ParcelNumber,

        /// New delivery address
        address: String,
    },

    /// Delete a registered parcel
    Delete {
        /// Parcel number
        number: ParcelNumber,
    },

    /// Run the lifecycle walkthrough against an in-memory store
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Commands report config errors themselves; here defaults are good enough.
    let config = DataDir::discover(&cli.data_dir)
        .and_then(|data_dir| data_dir.load_config())
        .unwrap_or_default();

    let format = match (cli.format, cli.json, config.output_format) {
        (Some(OutputFormat::Json), _, _) | (None, true, _) => "json",
        (Some(OutputFormat::Table), _, _) => "table",
        (Some(OutputFormat::Plain), _, _) => "plain",
        (None, false, ConfigFormat::Json) => "json",
        (None, false, ConfigFormat::Table) => "table",
        (None, false, ConfigFormat::Plain) => "plain",
    };
    let formatter = create_formatter(format);

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    if let Err(e) = logging::init(&log_level, cli.log_json) {
        eprintln!("{}", formatter.format_error(&e));
        return ExitCode::FAILURE;
    }

    match run(cli, format == "json", formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            if format == "json" {
                println!("{}", formatter.format_error(&e));
            } else {
                eprintln!("{}", formatter.format_error(&e));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, json: bool, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.as_path();

    match cli.command {
        Commands::Init => commands::init::execute(data_dir),
        Commands::Register { client, address } => {
            commands::register::execute(data_dir, client, address, formatter)
        }
        Commands::List {
            client,
            status,
            sort,
        } => commands::list::execute(data_dir, client, status, sort, formatter),
        Commands::Show { number } => commands::show::execute(data_dir, number, formatter),
        Commands::Advance { number } => commands::advance::execute(data_dir, number, formatter),
        Commands::SetAddress { number, address } => {
            commands::set_address::execute(data_dir, number, address, formatter)
        }
        Commands::Delete { number } => commands::delete::execute(data_dir, number, formatter),
        Commands::Demo => commands::demo::execute(json, formatter),
    }
}
