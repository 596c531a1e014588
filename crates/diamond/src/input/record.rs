//! Field records and their raw attribute values.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Legacy single-distance key, superseded by [`FOLDED_DISTANCE_KEY`].
pub const LEGACY_DISTANCE_KEY: &str = "distance";

/// Dimension key that a legacy `distance` value is read as.
pub const FOLDED_DISTANCE_KEY: &str = "fenceDistance";

/// A raw attribute value as it arrived from the data layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean flag (e.g. `hasLights: true`).
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Free text, possibly with units ("200 ft", "12-14'").
    Text(String),
    /// Missing or null.
    #[default]
    Absent,
}

impl RawValue {
    /// Whether this value counts as present: not absent, and for text,
    /// not blank after trimming.
    pub fn is_present(&self) -> bool {
        match self {
            RawValue::Absent => false,
            RawValue::Text(s) => !s.trim().is_empty(),
            RawValue::Bool(_) | RawValue::Number(_) => true,
        }
    }

    /// The value rendered back to a plain string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawValue::Text(s) => Cow::Borrowed(s.as_str()),
            RawValue::Bool(b) => Cow::Owned(b.to_string()),
            RawValue::Number(n) => Cow::Owned(n.to_string()),
            RawValue::Absent => Cow::Borrowed(""),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Absent)
    }
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawValue::Absent,
            Value::Bool(b) => RawValue::Bool(*b),
            Value::Number(n) => n.as_f64().map(RawValue::Number).unwrap_or(RawValue::Absent),
            Value::String(s) => RawValue::Text(s.clone()),
            // Nested structures are kept as their JSON text
            other => RawValue::Text(other.to_string()),
        }
    }
}

/// One physical playing field and its open set of attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Display name ("Field 3", "North Diamond").
    pub name: String,
    /// Attribute key to raw value, in source order.
    #[serde(default)]
    pub attributes: IndexMap<String, RawValue>,
}

impl FieldRecord {
    /// Create an empty record with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Raw stored value for a key, without legacy folding.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.attributes.get(key)
    }

    /// Value for a key as the engine reads it.
    ///
    /// A record without a present `fenceDistance` falls back to its legacy
    /// `distance` value.
    pub fn attribute(&self, key: &str) -> Option<&RawValue> {
        let direct = self.attributes.get(key);
        if key == FOLDED_DISTANCE_KEY && !direct.is_some_and(RawValue::is_present) {
            if let Some(legacy) = self.attributes.get(LEGACY_DISTANCE_KEY) {
                if legacy.is_present() {
                    return Some(legacy);
                }
            }
        }
        direct
    }

    /// Build a record from a JSON object.
    ///
    /// The name comes from `name` (string or number), then `fieldName`, then
    /// falls back to `Field {index + 1}`. All keys, including the name, stay
    /// in the attribute map; discovery excludes the bookkeeping ones.
    pub fn from_json_object(index: usize, object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let name = ["name", "fieldName"]
            .iter()
            .filter_map(|k| object.get(*k))
            .find_map(|v| match v {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| format!("Field {}", index + 1));

        let attributes = object
            .iter()
            .map(|(k, v)| (k.clone(), RawValue::from(v)))
            .collect();

        Self { name, attributes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence() {
        assert!(!RawValue::Absent.is_present());
        assert!(!RawValue::from("   ").is_present());
        assert!(RawValue::from("dirt").is_present());
        assert!(RawValue::from(false).is_present());
        assert!(RawValue::from(0.0).is_present());
    }

    #[test]
    fn test_legacy_distance_folds_into_fence_distance() {
        let record = FieldRecord::new("Field 1").with("distance", "300 ft");

        assert_eq!(record.attribute("fenceDistance"), Some(&RawValue::from("300 ft")));
        // Stored data is untouched
        assert!(record.get("fenceDistance").is_none());
    }

    #[test]
    fn test_present_fence_distance_wins_over_legacy() {
        let record = FieldRecord::new("Field 1")
            .with("distance", "300")
            .with("fenceDistance", "310");

        assert_eq!(record.attribute("fenceDistance"), Some(&RawValue::from("310")));
    }

    #[test]
    fn test_from_json_object_name_fallbacks() {
        let value = json!({"name": 3, "lights": true, "notes": null});
        let record = FieldRecord::from_json_object(0, value.as_object().unwrap());
        assert_eq!(record.name, "3");
        assert_eq!(record.get("lights"), Some(&RawValue::Bool(true)));
        assert_eq!(record.get("notes"), Some(&RawValue::Absent));

        let value = json!({"surface": "grass"});
        let record = FieldRecord::from_json_object(4, value.as_object().unwrap());
        assert_eq!(record.name, "Field 5");
    }
}
