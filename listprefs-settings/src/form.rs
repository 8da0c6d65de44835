//! Settings form specification.
//!
//! The form has one toggle per declared column plus a hidden `sort_opts`
//! field carrying the comma-joined column order. Rendering it is left to
//! the host; this module only describes it and reads submissions back.

use crate::PreferencesBlob;
use crate::resolver::{apply_order, resolve_unique};
use listprefs_model::{EntityType, FieldDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Name of the hidden field holding the column order.
pub const SORT_FIELD: &str = "sort_opts";

const SORT_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Boolean checkbox.
    Toggle,
    /// Hidden text input.
    HiddenText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub control: ControlKind,
    pub initial: FieldValue,
    pub required: bool,
}

/// Ordered description of the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    pub fields: Vec<FormField>,
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in form order, `sort_opts` last.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn toggles(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.control == ControlKind::Toggle)
    }
}

/// Describe the settings form for a view.
pub fn build_form_spec(
    declared: &[FieldDescriptor],
    entity_type: &EntityType,
    blob: &PreferencesBlob,
) -> FormSpec {
    let resolved = resolve_unique(declared, entity_type);
    let ordered = apply_order(resolved, |(_, field)| field.key.as_str(), &blob.order);

    let mut fields: Vec<FormField> = ordered
        .into_iter()
        .map(|(_, field)| FormField {
            initial: FieldValue::Bool(blob.is_visible(&field.key)),
            name: field.key,
            label: field.label,
            control: ControlKind::Toggle,
            required: false,
        })
        .collect();

    let sort_opts = fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(SORT_SEPARATOR);

    fields.push(FormField {
        name: SORT_FIELD.to_string(),
        label: "Column order".to_string(),
        control: ControlKind::HiddenText,
        initial: FieldValue::Text(sort_opts),
        required: true,
    });

    FormSpec { fields }
}

/// Read a submitted settings form back into preferences.
///
/// Submitted values follow HTML form semantics: a toggle is on when present
/// with a truthy value (`on`, `true`, `1`, `yes`) and off when absent.
/// `sort_opts` keeps only keys the form knows, first occurrence wins.
pub fn parse_submission(form: &FormSpec, submitted: &HashMap<String, String>) -> PreferencesBlob {
    let visibility: BTreeMap<String, bool> = form
        .toggles()
        .map(|f| {
            let on = submitted.get(&f.name).is_some_and(|v| is_truthy(v));
            (f.name.clone(), on)
        })
        .collect();

    let known: HashSet<&str> = form.toggles().map(|f| f.name.as_str()).collect();
    let mut seen = HashSet::new();
    let order: Vec<String> = submitted
        .get(SORT_FIELD)
        .map(|raw| {
            raw.split(SORT_SEPARATOR)
                .map(str::trim)
                .filter(|key| known.contains(key) && seen.insert(*key))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    PreferencesBlob { visibility, order }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}
