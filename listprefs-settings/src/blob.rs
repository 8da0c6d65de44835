use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A user's stored column preferences for one view.
///
/// JSON shape:
/// `{"list_display": {"<key>": bool}, "list_display_sort": ["<key>", ...]}`.
/// Missing or `null` fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesBlob {
    /// Column key -> shown. Keys not listed are shown.
    #[serde(rename = "list_display", default, deserialize_with = "null_as_default")]
    pub visibility: BTreeMap<String, bool>,
    /// Preferred column order, leading keys first.
    #[serde(rename = "list_display_sort", default, deserialize_with = "null_as_default")]
    pub order: Vec<String>,
}

impl PreferencesBlob {
    /// Parses stored settings, reading anything malformed as empty preferences.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(raw) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Ignoring malformed display settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether the column with `key` is shown.
    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(true)
    }

    pub fn is_empty(&self) -> bool {
        self.visibility.is_empty() && self.order.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
