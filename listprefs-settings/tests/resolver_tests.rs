use listprefs_model::{Attribute, ComputedColumn, EntityType, FieldDescriptor, Method, Record};
use listprefs_settings::{PreferencesBlob, compute_effective_list};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn plain_type() -> EntityType {
    EntityType::new("test", "Item")
}

fn declared(keys: &[&str]) -> Vec<FieldDescriptor> {
    keys.iter().map(|k| FieldDescriptor::attribute(*k)).collect()
}

fn strings(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn blob(visibility: &[(&str, bool)], order: &[&str]) -> PreferencesBlob {
    PreferencesBlob {
        visibility: visibility.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        order: strings(order),
    }
}

fn effective_keys(keys: &[&str], prefs: &PreferencesBlob) -> Vec<String> {
    compute_effective_list(&declared(keys), &plain_type(), prefs, &[])
        .keys()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn age(_: &Record) -> Value {
    json!(42)
}

// ── Worked examples ──────────────────────────────────────────────

#[test]
fn hidden_column_dropped_and_order_applied() {
    let prefs = blob(&[("b", false)], &["c", "a"]);
    assert_eq!(effective_keys(&["a", "b", "c", "d"], &prefs), strings(&["c", "a", "d"]));
}

#[test]
fn empty_preferences_keep_declared_order() {
    assert_eq!(
        effective_keys(&["a", "b", "c"], &PreferencesBlob::default()),
        strings(&["a", "b", "c"])
    );
}

#[test]
fn all_hidden_yields_empty_list() {
    let prefs = blob(&[("a", false), ("b", false)], &["b", "a"]);
    assert!(effective_keys(&["a", "b"], &prefs).is_empty());
}

#[test]
fn stale_order_entry_is_pruned() {
    let prefs = blob(&[], &["x", "a"]);
    assert_eq!(effective_keys(&["a", "b"], &prefs), strings(&["a", "b"]));
}

// ── Visibility ───────────────────────────────────────────────────

#[test]
fn explicit_true_keeps_column() {
    let prefs = blob(&[("a", true), ("b", false)], &[]);
    assert_eq!(effective_keys(&["a", "b", "c"], &prefs), strings(&["a", "c"]));
}

#[test]
fn visibility_for_unknown_key_is_ignored() {
    let prefs = blob(&[("gone", false)], &[]);
    assert_eq!(effective_keys(&["a", "b"], &prefs), strings(&["a", "b"]));
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn order_skipped_when_single_column_remains() {
    let prefs = blob(&[("a", false)], &["b", "a"]);
    assert_eq!(effective_keys(&["a", "b"], &prefs), strings(&["b"]));
}

#[test]
fn order_naming_hidden_column_does_not_resurrect_it() {
    let prefs = blob(&[("b", false)], &["b", "c", "a"]);
    assert_eq!(effective_keys(&["a", "b", "c"], &prefs), strings(&["c", "a"]));
}

#[test]
fn full_reverse_order() {
    let prefs = blob(&[], &["d", "c", "b", "a"]);
    assert_eq!(effective_keys(&["a", "b", "c", "d"], &prefs), strings(&["d", "c", "b", "a"]));
}

#[test]
fn unordered_columns_follow_in_declared_order() {
    let prefs = blob(&[], &["d"]);
    assert_eq!(effective_keys(&["a", "b", "c", "d"], &prefs), strings(&["d", "a", "b", "c"]));
}

#[test]
fn repeated_order_entries_count_once() {
    let prefs = blob(&[], &["b", "b", "a", "b"]);
    assert_eq!(effective_keys(&["a", "b", "c"], &prefs), strings(&["b", "a", "c"]));
}

#[test]
fn duplicate_declared_columns_appear_once() {
    assert_eq!(
        effective_keys(&["a", "b", "a"], &PreferencesBlob::default()),
        strings(&["a", "b"])
    );
}

#[test]
fn empty_declared_list() {
    assert!(effective_keys(&[], &blob(&[], &["a"])).is_empty());
}

// ── Editable narrowing ───────────────────────────────────────────

#[test]
fn editable_narrowed_to_shown_columns_in_editable_order() {
    let prefs = blob(&[("b", false)], &["d", "c"]);
    let result = compute_effective_list(
        &declared(&["a", "b", "c", "d"]),
        &plain_type(),
        &prefs,
        &strings(&["c", "b", "a"]),
    );
    assert_eq!(result.keys(), vec!["d", "c", "a"]);
    assert_eq!(result.editable, strings(&["c", "a"]));
}

#[test]
fn editable_key_not_declared_is_dropped() {
    let result = compute_effective_list(
        &declared(&["a"]),
        &plain_type(),
        &PreferencesBlob::default(),
        &strings(&["a", "zzz"]),
    );
    assert_eq!(result.editable, strings(&["a"]));
}

// ── Descriptors & labels ─────────────────────────────────────────

#[test]
fn descriptors_are_returned_with_resolved_labels() {
    let entity = EntityType::new("crm", "Person")
        .with_attribute(Attribute::new("email", "e-mail"))
        .with_method(Method::labelled("full_name", "name"));
    let computed = ComputedColumn::new("age_years", age).with_short_description("age");
    let declared = vec![
        FieldDescriptor::method("to_string"),
        FieldDescriptor::attribute("email"),
        FieldDescriptor::method("full_name"),
        computed.clone().into(),
    ];
    let prefs = blob(&[("email", false)], &["age_years", "to_string"]);

    let result = compute_effective_list(&declared, &entity, &prefs, &[]);

    assert_eq!(
        result.columns,
        vec![
            FieldDescriptor::ComputedFunction(computed),
            FieldDescriptor::method("to_string"),
            FieldDescriptor::method("full_name"),
        ]
    );
    let labels: Vec<&str> = result.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Age", "Person", "Name"]);
    assert_eq!(result.len(), 3);
}

#[test]
fn identical_inputs_give_identical_results() {
    let prefs = blob(&[("b", false)], &["x", "c", "a"]);
    let d = declared(&["a", "b", "c", "d"]);
    let editable = strings(&["a", "b"]);
    let first = compute_effective_list(&d, &plain_type(), &prefs, &editable);
    let second = compute_effective_list(&d, &plain_type(), &prefs, &editable);
    assert_eq!(first, second);
    assert_eq!(prefs.order, strings(&["x", "c", "a"]));
}
