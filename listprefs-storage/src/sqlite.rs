//! SQLite-backed display settings.
//!
//! One row per `(user_id, app_label, model, view)`, enforced by a unique
//! constraint so create-if-absent stays atomic across connections.

use crate::{EMPTY_SETTINGS, SettingsKey, SettingsStore, StorageError, StorageResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Persistent settings store backed by SQLite.
#[derive(Clone)]
pub struct SqliteSettingsStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSettingsStore {
    /// Opens (or creates) a settings database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        info!("Opened display settings store at {:?}", path);
        Self::with_connection(conn)
    }

    /// Opens an in-memory settings store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS display_settings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                app_label TEXT NOT NULL,
                model TEXT NOT NULL,
                view TEXT NOT NULL,
                settings TEXT NOT NULL DEFAULT '{}',
                UNIQUE(user_id, app_label, model, view)
            );
            ",
        )?;
        Ok(())
    }

    /// Returns the total number of stored settings rows.
    pub fn row_count(&self) -> StorageResult<usize> {
        let conn = self.lock()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM display_settings", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn get_or_create(&self, key: &SettingsKey) -> StorageResult<String> {
        let conn = self.lock()?;
        let created = conn.execute(
            "INSERT OR IGNORE INTO display_settings (user_id, app_label, model, view, settings)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![key.user_id, key.group, key.entity_type, key.view, EMPTY_SETTINGS],
        )?;
        if created > 0 {
            debug!(%key, "created display settings row");
        }
        let raw = conn.query_row(
            "SELECT settings FROM display_settings
             WHERE user_id = ?1 AND app_label = ?2 AND model = ?3 AND view = ?4",
            params![key.user_id, key.group, key.entity_type, key.view],
            |row| row.get(0),
        )?;
        Ok(raw)
    }

    fn load(&self, key: &SettingsKey) -> StorageResult<Option<String>> {
        let conn = self.lock()?;
        let raw = conn
            .query_row(
                "SELECT settings FROM display_settings
                 WHERE user_id = ?1 AND app_label = ?2 AND model = ?3 AND view = ?4",
                params![key.user_id, key.group, key.entity_type, key.view],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw)
    }

    fn save(&self, key: &SettingsKey, raw: &str) -> StorageResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO display_settings (user_id, app_label, model, view, settings)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id, app_label, model, view)
             DO UPDATE SET settings = excluded.settings",
            params![key.user_id, key.group, key.entity_type, key.view, raw],
        )?;
        debug!(%key, "saved display settings");
        Ok(())
    }
}
