use crate::{EMPTY_SETTINGS, SettingsKey, SettingsStore, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Process-local settings store.
///
/// Create-if-absent runs under the map lock, so concurrent first accesses for
/// the same key observe a single row.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    rows: Mutex<HashMap<SettingsKey, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.rows.lock().map_err(|_| StorageError::LockPoisoned)?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_or_create(&self, key: &SettingsKey) -> StorageResult<String> {
        let mut rows = self.rows.lock().map_err(|_| StorageError::LockPoisoned)?;
        let raw = rows.entry(key.clone()).or_insert_with(|| {
            debug!(%key, "creating display settings row");
            EMPTY_SETTINGS.to_string()
        });
        Ok(raw.clone())
    }

    fn load(&self, key: &SettingsKey) -> StorageResult<Option<String>> {
        let rows = self.rows.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(rows.get(key).cloned())
    }

    fn save(&self, key: &SettingsKey, raw: &str) -> StorageResult<()> {
        let mut rows = self.rows.lock().map_err(|_| StorageError::LockPoisoned)?;
        rows.insert(key.clone(), raw.to_string());
        debug!(%key, "saved display settings");
        Ok(())
    }
}
