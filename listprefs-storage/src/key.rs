//! Identifier for one stored settings row.

use listprefs_model::EntityType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings are stored once per `(user, group, entity type, view)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SettingsKey {
    pub user_id: String,
    pub group: String,
    pub entity_type: String,
    pub view: String,
}

impl SettingsKey {
    pub fn new(
        user_id: impl Into<String>,
        group: impl Into<String>,
        entity_type: impl Into<String>,
        view: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            group: group.into(),
            entity_type: entity_type.into(),
            view: view.into(),
        }
    }

    /// Key for a user browsing `entity_type` through `view`.
    pub fn for_view(
        user_id: impl Into<String>,
        entity_type: &EntityType,
        view: impl Into<String>,
    ) -> Self {
        Self::new(user_id, entity_type.group.clone(), entity_type.name.clone(), view)
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}.{}/{}", self.user_id, self.group, self.entity_type, self.view)
    }
}
