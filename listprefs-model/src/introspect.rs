//! Field introspection: descriptor -> `(key, label)`.
//!
//! Lookup priority, first match wins:
//! 1. a declared data attribute of the entity type (its verbose name)
//! 2. a computed function carrying a short description
//! 3. a method of the entity type carrying a short description
//! 4. the type's string-form accessor (the entity type's name)
//! 5. the identifier itself, each `_` turned into a space
//!
//! Every label is then title-cased. Rule 5 always matches, so resolution
//! never fails.

use crate::{EntityType, FieldDescriptor};
use serde::{Deserialize, Serialize};

/// Name of the accessor rendering a record in its string form.
pub const DISPLAY_ACCESSOR: &str = "to_string";

const SEPARATOR: char = '_';

/// A descriptor reduced to its stable key and display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedField {
    pub key: String,
    pub label: String,
}

/// Resolve one declared column against its entity type.
pub fn resolve_field(descriptor: &FieldDescriptor, entity_type: &EntityType) -> ResolvedField {
    let (key, label) = match descriptor {
        FieldDescriptor::ComputedFunction(column) => {
            let label = column
                .short_description
                .clone()
                .unwrap_or_else(|| humanize(&column.ident));
            (column.ident.clone(), label)
        }
        FieldDescriptor::NamedAttribute(name) | FieldDescriptor::MethodReference(name) => {
            (name.clone(), label_for_name(name, entity_type))
        }
    };

    ResolvedField {
        key,
        label: title_case(&label),
    }
}

/// Resolve a declared column list, preserving its order.
pub fn resolve_fields(
    declared: &[FieldDescriptor],
    entity_type: &EntityType,
) -> Vec<ResolvedField> {
    declared
        .iter()
        .map(|descriptor| resolve_field(descriptor, entity_type))
        .collect()
}

fn label_for_name(name: &str, entity_type: &EntityType) -> String {
    if let Some(attribute) = entity_type.attribute(name) {
        return attribute.verbose_name.clone();
    }
    if let Some(label) = entity_type
        .method(name)
        .and_then(|m| m.short_description.as_ref())
    {
        return label.clone();
    }
    if name == DISPLAY_ACCESSOR {
        return entity_type.name.clone();
    }
    humanize(name)
}

/// Turn an identifier into words: `due_date` -> "due date".
///
/// Each separator becomes one space; nothing is collapsed or trimmed.
pub fn humanize(ident: &str) -> String {
    ident.replace(SEPARATOR, " ")
}

/// Upper-case the first letter of every whitespace-separated word,
/// lower-case the rest. Whitespace is kept as is.
fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut word_start = true;
    for c in label.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
