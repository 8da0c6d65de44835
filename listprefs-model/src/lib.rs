//! Column model for listprefs.
//!
//! Defines the types a host view hands to the preferences engine:
//! - [`EntityType`] — the schema of the records a list view browses
//!   (declared attributes with verbose names, labelled methods)
//! - [`Record`] — one row of that entity type, input to computed columns
//! - [`FieldDescriptor`] — a declared column: a named attribute, a computed
//!   function, or a method reference
//! - [`resolve_field`] — turns a descriptor into a stable key and display label
//!
//! Everything here is pure data; persistence and preference merging live in
//! `listprefs-storage` and `listprefs-settings`.

mod descriptor;
mod introspect;
mod record;
mod schema;

pub use descriptor::{ComputeFn, ComputedColumn, FieldDescriptor};
pub use introspect::{DISPLAY_ACCESSOR, ResolvedField, humanize, resolve_field, resolve_fields};
pub use record::Record;
pub use schema::{Attribute, EntityType, Method};
