// crates/kml-rs/src/coerce.rs

//! Attribute maps and the lenient coercion of raw attribute text into typed
//! field values.
//!
//! Every function here is total: a missing key or malformed text produces the
//! field's declared default (and a log line), never an error. Malformed
//! documents must still load.

use crate::codec::TokenEnum;
use crate::types::ResourceRef;
use core::str::FromStr;
use log::warn;

/// Raw `name -> text` pairs for one element, in document order.
///
/// Inserting a key that already exists replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// --- Single-value coercion (used by field setters) ---

/// Parses `raw` as a number, falling back to `default` on malformed text.
pub fn parse_number<T: FromStr>(field: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "Malformed numeric value '{}' for field '{}', using default",
                raw, field
            );
            default
        }
    }
}

/// Parses a floating-point field. `NaN` and the infinities are rejected like
/// any other malformed text, so every decoded value compares equal to itself.
pub fn parse_float(field: &str, raw: &str, default: f64) -> f64 {
    let value = parse_number(field, raw, default);
    if value.is_finite() {
        value
    } else {
        warn!(
            "Non-finite numeric value '{}' for field '{}', using default",
            raw, field
        );
        default
    }
}

/// Parses an `xsd:boolean` (`true`, `false`, `1`, `0`).
pub fn parse_bool(field: &str, raw: &str, default: bool) -> bool {
    match raw.trim() {
        "1" | "true" => true,
        "0" | "false" => false,
        other => {
            warn!(
                "Malformed boolean value '{}' for field '{}', using default",
                other, field
            );
            default
        }
    }
}

/// Parses a resource reference; malformed text yields no reference.
pub fn parse_reference(raw: &str) -> Option<ResourceRef> {
    ResourceRef::parse(raw)
}

/// Decodes an enumerated token, falling back to the enum's default.
pub fn parse_token<T: TokenEnum>(raw: &str) -> T {
    T::from_token(raw.trim())
}

// --- Map lookups ---

/// Reads a numeric field from the map, or its default when absent or malformed.
pub fn number<T: FromStr>(attributes: &AttributeMap, key: &str, default: T) -> T {
    match attributes.get(key) {
        Some(raw) => parse_number(key, raw, default),
        None => default,
    }
}

pub fn boolean(attributes: &AttributeMap, key: &str, default: bool) -> bool {
    match attributes.get(key) {
        Some(raw) => parse_bool(key, raw, default),
        None => default,
    }
}

pub fn reference(attributes: &AttributeMap, key: &str) -> Option<ResourceRef> {
    attributes.get(key).and_then(parse_reference)
}

/// Reads a free-text field. Present-but-empty is kept as `Some("")`.
pub fn text(attributes: &AttributeMap, key: &str) -> Option<String> {
    attributes.get(key).map(String::from)
}

pub fn token<T: TokenEnum>(attributes: &AttributeMap, key: &str) -> T {
    attributes.get(key).map_or(T::DEFAULT, parse_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = AttributeMap::new();
        map.insert("href", "a.kml");
        map.insert("refreshMode", "onInterval");
        map.insert("href", "b.kml");

        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["href", "refreshMode"]);
        assert_eq!(map.get("href"), Some("b.kml"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut map: AttributeMap = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(map.remove("a"), Some("1".into()));
        assert_eq!(map.remove("a"), None);
        assert!(!map.contains_key("a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_number_parses_and_falls_back() {
        let map: AttributeMap = [("good", " 30 "), ("bad", "thirty")].into_iter().collect();
        assert_eq!(number(&map, "good", 4.0_f64), 30.0);
        assert_eq!(number(&map, "bad", 4.0_f64), 4.0);
        assert_eq!(number(&map, "missing", 4.0_f64), 4.0);
        assert_eq!(number(&map, "good", 0_u16), 30);
        assert_eq!(number(&map, "bad", -1_i32), -1);
    }

    #[test]
    fn test_float_rejects_non_finite() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", " -Infinity "] {
            assert_eq!(parse_float("refreshInterval", raw, 4.0), 4.0, "{raw}");
        }
        assert_eq!(parse_float("viewBoundScale", "-0.5", 1.0), -0.5);
        assert_eq!(parse_float("viewBoundScale", "1e3", 1.0), 1000.0);
    }

    #[test]
    fn test_number_rejects_out_of_range() {
        let map: AttributeMap = [("n", "70000")].into_iter().collect();
        assert_eq!(number(&map, "n", 7_u16), 7);
        assert_eq!(number(&map, "n", 7_u32), 70000);
    }

    #[test]
    fn test_boolean_lexical_space() {
        let map: AttributeMap = [("a", "1"), ("b", "false"), ("c", "yes")]
            .into_iter()
            .collect();
        assert!(boolean(&map, "a", false));
        assert!(!boolean(&map, "b", true));
        assert!(boolean(&map, "c", true));
        assert!(!boolean(&map, "missing", false));
    }

    #[test]
    fn test_text_keeps_empty_values() {
        let map: AttributeMap = [("viewFormat", "")].into_iter().collect();
        assert_eq!(text(&map, "viewFormat"), Some(String::new()));
        assert_eq!(text(&map, "httpQuery"), None);
    }

    #[test]
    fn test_reference_absent_or_malformed_is_none() {
        let map: AttributeMap = [("href", "not a url")].into_iter().collect();
        assert_eq!(reference(&map, "href"), None);
        assert_eq!(reference(&map, "missing"), None);
    }
}
