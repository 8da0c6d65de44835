use crate::{
    EffectiveColumns, FormSpec, PreferencesBlob, SettingsResult, build_form_spec,
    compute_effective_list, parse_submission,
};
use listprefs_model::{EntityType, FieldDescriptor};
use listprefs_storage::{SettingsKey, SettingsStore};
use std::collections::HashMap;
use tracing::debug;

/// Who is looking at which view of which entity type.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub user_id: &'a str,
    pub view: &'a str,
    pub entity_type: &'a EntityType,
}

impl<'a> ViewContext<'a> {
    pub fn new(user_id: &'a str, view: &'a str, entity_type: &'a EntityType) -> Self {
        Self {
            user_id,
            view,
            entity_type,
        }
    }

    pub fn settings_key(&self) -> SettingsKey {
        SettingsKey::for_view(self.user_id, self.entity_type, self.view)
    }
}

/// Per-user column settings for list views, backed by a [`SettingsStore`].
pub struct ListDisplaySettings<S> {
    store: S,
}

impl<S: SettingsStore> ListDisplaySettings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The user's stored preferences, creating an empty row on first access.
    pub fn preferences(&self, ctx: &ViewContext<'_>) -> SettingsResult<PreferencesBlob> {
        let raw = self.store.get_or_create(&ctx.settings_key())?;
        Ok(PreferencesBlob::parse(&raw))
    }

    /// Columns to render for this user, and which of `editable` stay editable.
    pub fn effective_columns(
        &self,
        ctx: &ViewContext<'_>,
        declared: &[FieldDescriptor],
        editable: &[String],
    ) -> SettingsResult<EffectiveColumns> {
        let blob = self.preferences(ctx)?;
        Ok(compute_effective_list(declared, ctx.entity_type, &blob, editable))
    }

    /// The settings form, pre-filled from the user's stored preferences.
    pub fn settings_form(
        &self,
        ctx: &ViewContext<'_>,
        declared: &[FieldDescriptor],
    ) -> SettingsResult<FormSpec> {
        let blob = self.preferences(ctx)?;
        Ok(build_form_spec(declared, ctx.entity_type, &blob))
    }

    /// Parse a submitted settings form and store the result.
    pub fn submit_form(
        &self,
        ctx: &ViewContext<'_>,
        declared: &[FieldDescriptor],
        submitted: &HashMap<String, String>,
    ) -> SettingsResult<PreferencesBlob> {
        let form = self.settings_form(ctx, declared)?;
        let blob = parse_submission(&form, submitted);
        self.save_preferences(ctx, &blob)?;
        Ok(blob)
    }

    pub fn save_preferences(
        &self,
        ctx: &ViewContext<'_>,
        blob: &PreferencesBlob,
    ) -> SettingsResult<()> {
        let key = ctx.settings_key();
        self.store.save(&key, &blob.to_json()?)?;
        let hidden = blob.visibility.values().filter(|v| !**v).count();
        debug!(%key, hidden, "stored column preferences");
        Ok(())
    }
}
