//! Effective column resolution.

use crate::PreferencesBlob;
use listprefs_model::{EntityType, FieldDescriptor, ResolvedField, resolve_field};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// The columns a user sees, in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveColumns {
    /// Declared descriptors to render.
    pub columns: Vec<FieldDescriptor>,
    /// Key and label of each entry in `columns`.
    pub fields: Vec<ResolvedField>,
    /// Inline-editable keys still present among `columns`.
    pub editable: Vec<String>,
}

impl EffectiveColumns {
    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.key.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

/// Merge stored preferences against the declared columns of a view.
///
/// Hidden columns are dropped first. The remaining columns are then placed
/// in preferred order, followed by any columns the order does not mention in
/// declared order. `editable` is narrowed to the keys that survive, keeping
/// its own order.
pub fn compute_effective_list(
    declared: &[FieldDescriptor],
    entity_type: &EntityType,
    blob: &PreferencesBlob,
    editable: &[String],
) -> EffectiveColumns {
    let visible: Vec<(&FieldDescriptor, ResolvedField)> = resolve_unique(declared, entity_type)
        .into_iter()
        .filter(|(_, field)| blob.is_visible(&field.key))
        .collect();

    let ordered = apply_order(visible, |(_, field)| field.key.as_str(), &blob.order);

    let shown: HashSet<&str> = ordered.iter().map(|(_, f)| f.key.as_str()).collect();
    let editable: Vec<String> = editable
        .iter()
        .filter(|key| shown.contains(key.as_str()))
        .cloned()
        .collect();

    let (columns, fields): (Vec<_>, Vec<_>) = ordered
        .into_iter()
        .map(|(descriptor, field)| (descriptor.clone(), field))
        .unzip();

    EffectiveColumns {
        columns,
        fields,
        editable,
    }
}

/// Resolve declared columns, keeping the first descriptor for each key.
pub(crate) fn resolve_unique<'a>(
    declared: &'a [FieldDescriptor],
    entity_type: &EntityType,
) -> Vec<(&'a FieldDescriptor, ResolvedField)> {
    let mut seen = HashSet::new();
    declared
        .iter()
        .map(|descriptor| (descriptor, resolve_field(descriptor, entity_type)))
        .filter(|(_, field)| seen.insert(field.key.clone()))
        .collect()
}

/// Reorder `items` by a preferred key order.
///
/// Order keys not found among `items` (and repeats) are pruned. Items named by
/// the pruned order come first in that order; the rest follow in their
/// original order. With no order or at most one item, `items` is returned
/// unchanged.
pub(crate) fn apply_order<T>(
    items: Vec<T>,
    key_of: impl Fn(&T) -> &str,
    order: &[String],
) -> Vec<T> {
    if order.is_empty() || items.len() <= 1 {
        return items;
    }

    let indices: Vec<usize> = {
        let position: HashMap<&str, usize> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (key_of(item), i))
            .collect();

        let mut placed = HashSet::new();
        let mut indices: Vec<usize> = order
            .iter()
            .filter_map(|key| position.get(key.as_str()).copied())
            .filter(|&i| placed.insert(i))
            .collect();

        let stale = order.len() - indices.len();
        if stale > 0 {
            debug!(stale, "pruned order entries with no matching column");
        }

        indices.extend((0..items.len()).filter(|i| !placed.contains(i)));
        indices
    };

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    indices
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}
