//! Per-user list column preferences.
//!
//! Merges a user's stored preferences (which columns are hidden, in which
//! order) against the columns a view declares:
//! - [`PreferencesBlob`] — lenient codec for the stored JSON settings
//! - [`compute_effective_list`] — the columns to render, and which of them
//!   stay inline-editable
//! - [`build_form_spec`] / [`parse_submission`] — the settings form and its
//!   way back into a blob
//! - [`ListDisplaySettings`] — the above wired to a [`SettingsStore`]
//!
//! Preferences never fail a render: malformed settings read as empty, and
//! order entries naming columns the view no longer declares are dropped.
//!
//! [`SettingsStore`]: listprefs_storage::SettingsStore

mod blob;
mod error;
mod form;
mod resolver;
mod service;

pub use blob::PreferencesBlob;
pub use error::{SettingsError, SettingsResult};
pub use form::{
    ControlKind, FieldValue, FormField, FormSpec, SORT_FIELD, build_form_spec, parse_submission,
};
pub use resolver::{EffectiveColumns, compute_effective_list};
pub use service::{ListDisplaySettings, ViewContext};
