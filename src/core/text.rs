//! # Localized Text
//!
//! Every user-visible string in the decision tree is a `LocalizedText`:
//! either one language-invariant string or a map from language key to
//! (recursively) more localized text.
//!
//! ```text
//! "Choose a path"                                  → Plain
//! { "javascript": "...", "java": "...", ... }      → Localized
//! null                                             → Absent
//! ```
//!
//! Resolution order for a `Localized` map is fixed:
//!
//! 1. exact match on the active language (string values only)
//! 2. the fallback language (`"javascript"` unless configured otherwise)
//! 3. breadth-first search in insertion order for the first string leaf
//! 4. the JSON rendering of the whole structure
//!
//! so `resolve_text` always produces a `String` and never fails.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Language used when the active language has no entry. It is the most
/// complete language in the built-in tree.
pub const CANONICAL_LANGUAGE: &str = "javascript";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(IndexMap<String, LocalizedText>),
    #[default]
    Absent,
}

impl LocalizedText {
    pub fn plain(text: impl Into<String>) -> Self {
        LocalizedText::Plain(text.into())
    }

    /// Build a `Localized` map from `(language, text)` pairs, keeping their order.
    pub fn localized<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        LocalizedText::Localized(
            pairs
                .into_iter()
                .map(|(lang, text)| (lang.into(), LocalizedText::Plain(text.into())))
                .collect(),
        )
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        LocalizedText::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        LocalizedText::Plain(text)
    }
}

/// JSON → `LocalizedText`. Scalars become their JSON rendering, arrays are
/// keyed by index (`"0"`, `"1"`, ...), and `null` becomes `Absent`.
impl From<Value> for LocalizedText {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LocalizedText::Absent,
            Value::String(text) => LocalizedText::Plain(text),
            Value::Bool(_) | Value::Number(_) => LocalizedText::Plain(value.to_string()),
            Value::Array(items) => LocalizedText::Localized(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item.into()))
                    .collect(),
            ),
            Value::Object(map) => LocalizedText::Localized(
                map.into_iter().map(|(key, item)| (key, item.into())).collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(LocalizedText::from)
    }
}

/// Resolve `item` to display text for `language`, falling back to `fallback`.
pub fn resolve_text(item: &LocalizedText, language: &str, fallback: &str) -> String {
    let map = match item {
        LocalizedText::Plain(text) => return text.clone(),
        LocalizedText::Absent => return String::new(),
        LocalizedText::Localized(map) => map,
    };

    if let Some(LocalizedText::Plain(text)) = map.get(language) {
        return text.clone();
    }
    if let Some(LocalizedText::Plain(text)) = map.get(fallback) {
        return text.clone();
    }
    if let Some(text) = first_string_leaf(map) {
        return text.to_string();
    }

    serde_json::to_string(item).unwrap_or_default()
}

/// Breadth-first walk over nested maps, visiting entries in insertion order.
fn first_string_leaf(root: &IndexMap<String, LocalizedText>) -> Option<&str> {
    let mut queue = VecDeque::from([root]);
    while let Some(map) = queue.pop_front() {
        for value in map.values() {
            match value {
                LocalizedText::Plain(text) => return Some(text),
                LocalizedText::Localized(nested) => queue.push_back(nested),
                LocalizedText::Absent => {}
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LocalizedText {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_text_ignores_language() {
        let text = LocalizedText::plain("plain");
        assert_eq!(resolve_text(&text, "java", CANONICAL_LANGUAGE), "plain");
        assert_eq!(resolve_text(&text, "klingon", CANONICAL_LANGUAGE), "plain");
    }

    #[test]
    fn test_exact_language_match_wins() {
        let text = LocalizedText::localized([("javascript", "A"), ("french", "B")]);
        assert_eq!(resolve_text(&text, "french", CANONICAL_LANGUAGE), "B");
    }

    #[test]
    fn test_canonical_fallback_when_language_missing() {
        let text = LocalizedText::localized([("javascript", "A"), ("french", "B")]);
        assert_eq!(resolve_text(&text, "spanish", CANONICAL_LANGUAGE), "A");
    }

    #[test]
    fn test_first_string_in_insertion_order_without_fallback() {
        let text = LocalizedText::localized([("french", "B"), ("german", "C")]);
        assert_eq!(resolve_text(&text, "spanish", CANONICAL_LANGUAGE), "B");
    }

    #[test]
    fn test_configured_fallback_language() {
        let text = LocalizedText::localized([("javascript", "A"), ("java", "J")]);
        assert_eq!(resolve_text(&text, "spanish", "java"), "J");
    }

    #[test]
    fn test_exact_match_must_be_a_string() {
        // "java" maps to a nested object, so it is skipped in favor of the fallback.
        let text = parse(r#"{"java": {"inner": "nested"}, "javascript": "A"}"#);
        assert_eq!(resolve_text(&text, "java", CANONICAL_LANGUAGE), "A");
    }

    #[test]
    fn test_breadth_first_prefers_shallow_strings() {
        // The shallow "b" is found before descending into "a".
        let text = parse(r#"{"a": {"deep": "deep"}, "b": "shallow"}"#);
        assert_eq!(resolve_text(&text, "x", CANONICAL_LANGUAGE), "shallow");
    }

    #[test]
    fn test_breadth_first_descends_level_by_level() {
        let text = parse(r#"{"a": {"x": {"y": "third"}}, "b": {"z": "second"}}"#);
        assert_eq!(resolve_text(&text, "x", CANONICAL_LANGUAGE), "second");
    }

    #[test]
    fn test_no_string_leaf_stringifies_structure() {
        let text = parse(r#"{"a": {}, "b": null}"#);
        assert_eq!(resolve_text(&text, "x", CANONICAL_LANGUAGE), r#"{"a":{},"b":null}"#);
    }

    #[test]
    fn test_absent_resolves_to_empty() {
        assert_eq!(resolve_text(&LocalizedText::Absent, "java", CANONICAL_LANGUAGE), "");
    }

    #[test]
    fn test_empty_string_is_kept() {
        let text = LocalizedText::plain("");
        assert_eq!(resolve_text(&text, "java", CANONICAL_LANGUAGE), "");
    }

    #[test]
    fn test_json_scalars_become_plain_text() {
        assert_eq!(parse("42"), LocalizedText::plain("42"));
        assert_eq!(parse("true"), LocalizedText::plain("true"));
        assert_eq!(parse("null"), LocalizedText::Absent);
    }

    #[test]
    fn test_json_arrays_are_indexed() {
        let text = parse(r#"["first", "second"]"#);
        assert_eq!(resolve_text(&text, "1", CANONICAL_LANGUAGE), "second");
        assert_eq!(resolve_text(&text, "x", CANONICAL_LANGUAGE), "first");
    }

    #[test]
    fn test_deserialize_preserves_key_order() {
        let text = parse(r#"{"zeta": "Z", "alpha": "A"}"#);
        let LocalizedText::Localized(map) = text else {
            panic!("expected a localized map");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }
}
