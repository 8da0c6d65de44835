//! Storage configuration, read from `~/.listprefs/storage.toml`.
//!
//! ```toml
//! [storage]
//! backend = "sqlite"
//! path = "/var/lib/listprefs/display_settings.db"
//! ```

use crate::{MemorySettingsStore, SettingsStore, SqliteSettingsStore, StorageResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Which settings store implementation to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on exit.
    Memory,
    #[default]
    /// SQLite database file.
    Sqlite,
}

/// Storage configuration parsed from `storage.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf {
    dirs_path().join("display_settings.db")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_database_path(),
        }
    }
}

impl StorageConfig {
    /// Loads config from `~/.listprefs/storage.toml` if it exists.
    pub fn load() -> Self {
        Self::load_from(dirs_path().join("storage.toml"))
    }

    /// Loads config from an explicit path.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(config_path: impl AsRef<Path>) -> Self {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            info!("No storage config at {:?}, using defaults", config_path);
            return Self::default();
        }

        match std::fs::read_to_string(config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded storage config from {:?}", config_path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse storage config {:?}: {}. Using defaults.",
                        config_path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read storage config {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Parses the TOML text of a config file.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(contents).map(|file| file.storage)
    }

    /// Opens the configured store.
    pub fn open_store(&self) -> StorageResult<Box<dyn SettingsStore>> {
        match self.backend {
            StorageBackend::Memory => Ok(Box::new(MemorySettingsStore::new())),
            StorageBackend::Sqlite => Ok(Box::new(SqliteSettingsStore::open(&self.path)?)),
        }
    }
}

/// Raw TOML structure matching the storage.toml format.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    storage: StorageConfig,
}

/// Resolve the listprefs config directory.
fn dirs_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".listprefs")
    } else if let Ok(home) = std::env::var("USERPROFILE") {
        Path::new(&home).join(".listprefs")
    } else {
        PathBuf::from(".listprefs")
    }
}
