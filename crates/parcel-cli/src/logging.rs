// Rust guideline compliant 2026-10-16

//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so they never mix with command output on stdout.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Arguments
///
/// * `level` - One of error/warn/info/debug/trace
/// * `json` - Emit JSON lines instead of human-readable text
///
/// # Errors
///
/// Returns an error if the level is unknown.
pub fn init(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    Ok(())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error if the name is not a known level.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
