use listprefs_storage::StorageError;

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors surfaced by [`crate::ListDisplaySettings`].
///
/// Malformed stored settings are not an error; they read as empty preferences.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
