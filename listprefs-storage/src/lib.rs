//! Display settings persistence for listprefs.
//!
//! Stores one opaque JSON settings blob per `(user, group, entity type, view)`.
//! The blob's shape is owned by `listprefs-settings`; this crate only
//! guarantees durable storage and an atomic create-if-absent.
//!
//! # Implementations
//!
//! - [`MemorySettingsStore`] keeps rows in a mutex-guarded map
//! - [`SqliteSettingsStore`] keeps rows in a `display_settings` table whose
//!   unique key makes concurrent first access safe across processes
//!
//! [`StorageConfig`] picks one from `storage.toml`.

mod config;
mod error;
mod key;
mod memory;
mod sqlite;

pub use config::{StorageBackend, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use key::SettingsKey;
pub use memory::MemorySettingsStore;
pub use sqlite::SqliteSettingsStore;

use std::sync::Arc;

/// Settings text stored for a freshly created row.
pub const EMPTY_SETTINGS: &str = "{}";

/// Durable key-value store for raw display settings.
pub trait SettingsStore: Send + Sync {
    /// Returns the stored settings for `key`, creating an empty row first if
    /// none exists. Concurrent first calls for one key must create one row.
    fn get_or_create(&self, key: &SettingsKey) -> StorageResult<String>;

    /// Returns the stored settings for `key` without creating a row.
    fn load(&self, key: &SettingsKey) -> StorageResult<Option<String>>;

    /// Replaces the stored settings for `key`, creating the row if needed.
    fn save(&self, key: &SettingsKey, raw: &str) -> StorageResult<()>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn get_or_create(&self, key: &SettingsKey) -> StorageResult<String> {
        (**self).get_or_create(key)
    }

    fn load(&self, key: &SettingsKey) -> StorageResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &SettingsKey, raw: &str) -> StorageResult<()> {
        (**self).save(key, raw)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Arc<S> {
    fn get_or_create(&self, key: &SettingsKey) -> StorageResult<String> {
        (**self).get_or_create(key)
    }

    fn load(&self, key: &SettingsKey) -> StorageResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &SettingsKey, raw: &str) -> StorageResult<()> {
        (**self).save(key, raw)
    }
}
