// Rust guideline compliant 2026-10-16

//! Implementation of the `parcel init` command.

use anyhow::Result;
use parcel_app::DataDir;
use std::path::Path;

/// Initializes a parcel data directory.
///
/// Creates the directory, a default `config.toml` and an empty store file.
/// Existing files are kept.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(data_dir: &Path) -> Result<()> {
    let (data_dir, created) = DataDir::init(data_dir)?;

    if created {
        println!("✓ Parcel data directory initialized at {}", data_dir.root().display());
    } else {
        println!("Parcel data directory already initialized at {}", data_dir.root().display());
    }

    Ok(())
}
