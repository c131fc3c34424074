// Rust guideline compliant 2026-10-16

//! Configuration management for the parcel tracker.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Extensions of the store's sidecar files.
const RESERVED_EXTENSIONS: [&str; 3] = ["seq", "lock", "tmp"];

/// Configuration for parcel tracker behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether blocked address changes and deletions report an error
    /// instead of succeeding silently.
    #[serde(default)]
    pub strict_guards: bool,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level for the CLI subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// File name of the JSONL store inside the data directory.
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_store_file() -> String {
    "parcels.jsonl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_guards: false,
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            store_file: default_store_file(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/config.toml`
    /// 3. Environment variables with `PARCELS_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PARCELS_STRICT_GUARDS` - Report blocked mutations (true/false)
    /// - `PARCELS_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `PARCELS_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `PARCELS_STORE_FILE` - Store file name
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PARCELS_STRICT_GUARDS") {
            self.strict_guards = val.parse().map_err(|_| {
                Error::Config("PARCELS_STRICT_GUARDS must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("PARCELS_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "PARCELS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PARCELS_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("PARCELS_STORE_FILE") {
            self.store_file = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_level` is not a known level
    /// - `store_file` is empty or not a bare file name
    /// - `store_file` would overwrite the config or a store sidecar file
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join("/"),
                self.log_level
            )));
        }

        let store_file = Path::new(&self.store_file);
        if self.store_file.trim().is_empty()
            || store_file.file_name().map(|name| name.len()) != Some(self.store_file.len())
        {
            return Err(Error::Config(format!(
                "store_file must be a plain file name, got {:?}",
                self.store_file
            )));
        }

        // The store writes `<stem>.seq`, `<stem>.lock` and `<name>.tmp` next to itself.
        let reserved_extension = store_file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| RESERVED_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if self.store_file == CONFIG_FILE || reserved_extension {
            return Err(Error::Config(format!(
                "store_file {:?} collides with a data directory file",
                self.store_file
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<data_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Env vars are process-wide; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("PARCELS_STRICT_GUARDS");
        std::env::remove_var("PARCELS_OUTPUT_FORMAT");
        std::env::remove_var("PARCELS_LOG_LEVEL");
        std::env::remove_var("PARCELS_STORE_FILE");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.strict_guards);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.store_file, "parcels.jsonl");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
strict_guards = true
output_format = "json"
log_level = "debug"
store_file = "tracker.jsonl"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.strict_guards);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.store_file, "tracker.jsonl");
    }

    #[test]
    fn test_config_validation_bad_log_level() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "log_level = \"loud\"").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_store_file_with_directory() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "store_file = \"../elsewhere.jsonl\"",
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_strict_guards() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("PARCELS_STRICT_GUARDS", "true");
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.strict_guards);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_strict_guards() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("PARCELS_STRICT_GUARDS", "sometimes");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_format() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("PARCELS_OUTPUT_FORMAT", "yaml");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "log_level = \"info\"").unwrap();

        std::env::set_var("PARCELS_LOG_LEVEL", "TRACE");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.log_level, "trace");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            strict_guards: true,
            output_format: OutputFormat::Plain,
            log_level: "info".to_string(),
            store_file: "custom.jsonl".to_string(),
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_config_validation_store_file_collisions() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();

        for store_file in ["config.toml", "parcels.seq", "x.lock", "parcels.jsonl.tmp", "P.SEQ"] {
            let temp_dir = TempDir::new().unwrap();
            std::fs::write(
                temp_dir.path().join(CONFIG_FILE),
                format!("store_file = {:?}", store_file),
            )
            .unwrap();

            let err = Config::load(temp_dir.path()).expect_err(store_file);
            assert!(matches!(err, Error::Config(_)), "{store_file}: {err}");
        }
    }

    #[test]
    fn test_config_validation_accepts_store_file_without_extension() {
        let config = Config {
            store_file: "parcels".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
