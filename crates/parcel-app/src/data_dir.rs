// Rust guideline compliant 2026-10-16

//! Data directory discovery and path management.

use crate::error::{AppError, Result};
use crate::service::{GuardMode, ParcelService};
use parcel_core::{Config, JsonlStore, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".parcels";

/// Resolved paths for a parcel data directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Opens an existing data directory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DataDirNotInitialized`] if the directory is missing.
    pub fn discover(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(AppError::DataDirNotInitialized {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Creates the data directory, default config, and empty store file.
    ///
    /// Existing files are left untouched, so re-running is safe.
    ///
    /// # Returns
    ///
    /// The data directory and whether anything was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created, or an
    /// existing config is invalid.
    pub fn init(root: &Path) -> Result<(Self, bool)> {
        let mut created = false;

        if !root.exists() {
            std::fs::create_dir_all(root)?;
            created = true;
        }

        let data_dir = Self::discover(root)?;

        if !data_dir.config_path().exists() {
            Config::default().save(root)?;
            created = true;
        }

        let config = data_dir.load_config()?;
        let store_path = data_dir.store_path(&config);
        if !store_path.exists() {
            std::fs::File::create(&store_path)?;
            created = true;
        }

        Ok((data_dir, created))
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Returns the JSONL store path configured by `config`.
    #[must_use]
    pub fn store_path(&self, config: &Config) -> PathBuf {
        self.root.join(&config.store_file)
    }

    /// Loads the data directory configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(&self.root)?)
    }

    /// Opens the JSONL store configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn open_store(&self, config: &Config) -> Result<JsonlStore> {
        Ok(JsonlStore::new(self.store_path(config))?)
    }

    /// Loads the configuration and opens a service over the JSONL store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or store cannot be loaded.
    pub fn open_service(&self) -> Result<(ParcelService<JsonlStore>, Config)> {
        let config = self.load_config()?;
        let store = self.open_store(&config)?;
        let service = ParcelService::with_guard_mode(store, GuardMode::from(&config));
        Ok((service, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let err = DataDir::discover(&temp_dir.path().join(".parcels")).expect_err("missing");
        assert!(matches!(err, AppError::DataDirNotInitialized { .. }));
    }

    #[test]
    fn test_init_creates_layout_once() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(".parcels");

        let (data_dir, created) = DataDir::init(&root).unwrap();
        assert!(created);
        assert!(data_dir.config_path().exists());
        assert!(root.join("parcels.jsonl").exists());

        let (_, created_again) = DataDir::init(&root).unwrap();
        assert!(!created_again);
    }

    #[test]
    fn test_open_service_registers_into_store_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(".parcels");
        let (data_dir, _) = DataDir::init(&root).unwrap();

        let (service, _config) = data_dir.open_service().unwrap();
        let parcel = service.register(1, "Addr A").unwrap();

        let content = std::fs::read_to_string(root.join("parcels.jsonl")).unwrap();
        assert!(content.contains(&format!("\"number\":{}", parcel.number)));
    }
}
