//! Tolerant field decoding
//!
//! Editors write `content.json` by hand, so leaf values arrive as strings,
//! numbers or the occasional wrong shape. Decoding never rejects a
//! well-formed document over a field's type.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A leaf field rendered as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self(s),
            Value::Number(n) => Self(number_text(&n)),
            Value::Bool(b) => Self(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::default(),
        }
    }
}

/// Integral floats print without a fraction (`45.0` reads as `45`)
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Text::from_value)
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Optional field as `&str`, with empty text counted as absent
pub fn present(field: &Option<Text>) -> Option<&str> {
    field.as_ref().map(Text::as_str).filter(|s| !s.is_empty())
}

/// Optional field as `&str`, empty text kept
pub fn raw(field: &Option<Text>) -> Option<&str> {
    field.as_ref().map(Text::as_str)
}

/// Nested record; a value of the wrong shape decodes as absent
pub fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(T::deserialize(value).ok()),
        _ => Ok(None),
    }
}

/// Ordered records; a non-array decodes as empty and a malformed
/// element decodes as an all-absent record
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => T::deserialize(item).unwrap_or_default(),
            _ => T::default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Leaf {
        #[serde(default)]
        value: Option<Text>,
    }

    #[test]
    fn test_scalar_coercion() {
        let p: Leaf = serde_json::from_str(r#"{"value": 2019}"#).unwrap();
        assert_eq!(raw(&p.value), Some("2019"));

        let p: Leaf = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert_eq!(raw(&p.value), Some("true"));

        let p: Leaf = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(p.value.is_none());

        let p: Leaf = serde_json::from_str(r#"{"value": ["a", "b"]}"#).unwrap();
        assert_eq!(present(&p.value), None);
    }

    #[test]
    fn test_integral_float_drops_fraction() {
        let h: Leaf = serde_json::from_str(r#"{"value": 45.0}"#).unwrap();
        assert_eq!(raw(&h.value), Some("45"));

        let h: Leaf = serde_json::from_str(r#"{"value": 4.5}"#).unwrap();
        assert_eq!(raw(&h.value), Some("4.5"));

        let h: Leaf = serde_json::from_str(r#"{"value": -3.0}"#).unwrap();
        assert_eq!(raw(&h.value), Some("-3"));
    }

    #[test]
    fn test_present_treats_empty_as_absent() {
        assert_eq!(present(&Some(Text::new(""))), None);
        assert_eq!(raw(&Some(Text::new(""))), Some(""));
        assert_eq!(present(&Some(Text::new("Ver"))), Some("Ver"));
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "section")]
        inner: Option<Leaf>,
        #[serde(default, deserialize_with = "records")]
        items: Vec<Leaf>,
    }

    #[test]
    fn test_wrong_shapes() {
        let h: Holder = serde_json::from_str(r#"{"inner": "oops", "items": {"a": 1}}"#).unwrap();
        assert!(h.inner.is_none());
        assert!(h.items.is_empty());

        let h: Holder =
            serde_json::from_str(r#"{"inner": {"value": "x"}, "items": [{"value": "a"}, 3, ["b"]]}"#)
                .unwrap();
        assert_eq!(raw(&h.inner.unwrap().value), Some("x"));
        assert_eq!(h.items.len(), 3);
        assert!(h.items[1].value.is_none());
        assert!(h.items[2].value.is_none());
    }
}
