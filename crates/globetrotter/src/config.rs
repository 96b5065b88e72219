//! Configuration management for globetrotter.
//!
//! Configuration is loaded with figment from defaults, a TOML file and
//! environment variables.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::share::DEFAULT_BASE_URL;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, SqliteStore};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "globetrotter";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "globetrotter.db";

/// Subdirectory used by the file backend.
const FILE_STORE_DIR_NAME: &str = "store";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GLOBETROTTER_`)
/// 2. TOML config file at `~/.config/globetrotter/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Share link configuration.
    pub share: ShareConfig,
}

/// Which medium backs the trip store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `SQLite` database file.
    #[default]
    Sqlite,
    /// One JSON file per key in a directory.
    File,
    /// Process memory; nothing survives exit.
    Memory,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backing medium.
    pub backend: Backend,
    /// Data directory.
    /// Defaults to `~/.local/share/globetrotter`
    pub data_dir: Option<PathBuf>,
    /// Path to the database file for the `sqlite` backend.
    /// Defaults to `<data_dir>/globetrotter.db`
    pub database_path: Option<PathBuf>,
}

/// Share-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL that share links point at.
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("GLOBETROTTER_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let base = self.share.base_url.trim();
        if base.is_empty() {
            return Err(Error::ConfigValidation {
                message: "share.base_url must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::ConfigValidation {
                message: format!("share.base_url must start with http:// or https://: {base}"),
            });
        }
        Ok(())
    }

    /// Get the data directory, resolving defaults if not set.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| self.data_dir().join(DATABASE_FILE_NAME))
    }

    /// Directory used by the file backend.
    #[must_use]
    pub fn file_store_dir(&self) -> PathBuf {
        self.data_dir().join(FILE_STORE_DIR_NAME)
    }

    /// Open the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the database or directory cannot be opened.
    pub fn open_backend(&self) -> Result<Box<dyn KeyValueStore>> {
        let backend: Box<dyn KeyValueStore> = match self.storage.backend {
            Backend::Sqlite => Box::new(SqliteStore::open(self.database_path())?),
            Backend::File => Box::new(FileStore::open(self.file_store_dir())?),
            Backend::Memory => Box::new(MemoryStore::new()),
        };
        Ok(backend)
    }
}
