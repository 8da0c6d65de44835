use listprefs_settings::PreferencesBlob;
use pretty_assertions::assert_eq;
use serde_json::json;

fn blob(visibility: &[(&str, bool)], order: &[&str]) -> PreferencesBlob {
    PreferencesBlob {
        visibility: visibility.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        order: order.iter().map(|k| k.to_string()).collect(),
    }
}

// ── Well-formed settings ─────────────────────────────────────────

#[test]
fn parse_full_settings() {
    let parsed = PreferencesBlob::parse(
        r#"{"list_display": {"a": true, "b": false}, "list_display_sort": ["b", "a"]}"#,
    );
    assert_eq!(parsed, blob(&[("a", true), ("b", false)], &["b", "a"]));
}

#[test]
fn parse_empty_object_is_empty_blob() {
    assert!(PreferencesBlob::parse("{}").is_empty());
}

#[test]
fn parse_missing_fields_default() {
    assert_eq!(
        PreferencesBlob::parse(r#"{"list_display_sort": ["x"]}"#),
        blob(&[], &["x"])
    );
    assert_eq!(
        PreferencesBlob::parse(r#"{"list_display": {"x": false}}"#),
        blob(&[("x", false)], &[])
    );
}

#[test]
fn parse_null_fields_default() {
    let parsed = PreferencesBlob::parse(r#"{"list_display": null, "list_display_sort": null}"#);
    assert_eq!(parsed, PreferencesBlob::default());
}

#[test]
fn parse_ignores_unknown_top_level_fields() {
    let parsed = PreferencesBlob::parse(r#"{"list_per_page": 50, "list_display_sort": ["a"]}"#);
    assert_eq!(parsed, blob(&[], &["a"]));
}

// ── Malformed settings read as empty ─────────────────────────────

#[test]
fn parse_empty_string() {
    assert_eq!(PreferencesBlob::parse(""), PreferencesBlob::default());
    assert_eq!(PreferencesBlob::parse("   "), PreferencesBlob::default());
}

#[test]
fn parse_invalid_json() {
    assert_eq!(PreferencesBlob::parse("{not json"), PreferencesBlob::default());
}

#[test]
fn parse_wrong_top_level_shape() {
    assert_eq!(PreferencesBlob::parse("[1, 2]"), PreferencesBlob::default());
    assert_eq!(PreferencesBlob::parse("null"), PreferencesBlob::default());
    assert_eq!(PreferencesBlob::parse("\"text\""), PreferencesBlob::default());
}

#[test]
fn parse_wrong_field_shape() {
    assert_eq!(
        PreferencesBlob::parse(r#"{"list_display": ["a"], "list_display_sort": ["b"]}"#),
        PreferencesBlob::default()
    );
    assert_eq!(
        PreferencesBlob::parse(r#"{"list_display": {"a": "yes"}}"#),
        PreferencesBlob::default()
    );
    assert_eq!(
        PreferencesBlob::parse(r#"{"list_display_sort": "a,b"}"#),
        PreferencesBlob::default()
    );
}

// ── Visibility & serialization ───────────────────────────────────

#[test]
fn missing_key_is_visible() {
    let b = blob(&[("hidden", false), ("shown", true)], &[]);
    assert!(!b.is_visible("hidden"));
    assert!(b.is_visible("shown"));
    assert!(b.is_visible("never_mentioned"));
}

#[test]
fn to_json_writes_both_fields() {
    let b = blob(&[("z", true), ("a", false)], &["z"]);
    let value: serde_json::Value = serde_json::from_str(&b.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({"list_display": {"a": false, "z": true}, "list_display_sort": ["z"]})
    );
}

#[test]
fn to_json_parses_back() {
    let b = blob(&[("a", false)], &["c", "a"]);
    assert_eq!(PreferencesBlob::parse(&b.to_json().unwrap()), b);
}
