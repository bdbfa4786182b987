//! Integration tests for the built-in named character reference table.

use quill_html::tokenizer::named_character_references::{any_entity_has_prefix, lookup_entity};
use quill_html::tokenizer::{BuiltinReferences, NamedReferences};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_legacy_entities() {
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("not"), Some("\u{00AC}"));
    // Only some names have a semicolon-less form.
    assert_eq!(lookup_entity("apos"), None);
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("AMP;"), Some("&"));
    assert_eq!(lookup_entity("Amp;"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_prefix_matching() {
    assert!(any_entity_has_prefix("a"));
    assert!(any_entity_has_prefix("am"));
    assert!(any_entity_has_prefix("amp"));
    assert!(any_entity_has_prefix("amp;"));
    assert!(any_entity_has_prefix("noti"));
    assert!(!any_entity_has_prefix("ampx"));
    assert!(!any_entity_has_prefix("xyz"));
}

#[test]
fn test_builtin_table_answers_through_the_trait() {
    let table: &dyn NamedReferences = &BuiltinReferences;
    assert_eq!(table.lookup("copy;"), Some("\u{00A9}"));
    assert!(table.has_prefix("cop"));
    assert!(!table.has_prefix("copz"));
}
