//! Record shapes and acceptance rules for orders and users.
//!
//! Validators take an arbitrary JSON value (a decoded request body or a
//! converted HTML form) and either return a strongly-typed field set or a
//! [`ValidationErrors`] map with one message per offending field. They never
//! panic on malformed input.

pub mod order;
pub mod user;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub use order::{Order, OrderInput};
pub use user::{User, UserInput};

/// Key used when the input as a whole is unusable (e.g. not a JSON object).
pub const BODY_FIELD: &str = "body";

/// Message for a missing field.
const REQUIRED: &str = "Required";

/// Field-level validation failures, keyed by the camelCase field name.
///
/// Only the first rule a field violates is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record a failure for `field`, keeping any earlier message.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
    }

    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields that failed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed")?;
        for (i, (field, message)) in self.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Name of a JSON value's type, as used in "Expected X, received Y" messages.
const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Narrow the input to a JSON object.
fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    value.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add(
            BODY_FIELD,
            format!("Expected object, received {}", type_name(value)),
        );
        errors
    })
}

/// Read a required string field.
fn read_string<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match map.get(field) {
        None => {
            errors.add(field, REQUIRED);
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            errors.add(
                field,
                format!("Expected string, received {}", type_name(other)),
            );
            None
        }
    }
}

/// Read a required numeric field.
fn read_number(map: &Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    match map.get(field) {
        None => {
            errors.add(field, REQUIRED);
            None
        }
        Some(Value::Number(n)) => {
            let value = n.as_f64();
            if value.is_none() {
                errors.add(field, "Expected number, received number out of range");
            }
            value
        }
        Some(other) => {
            errors.add(
                field,
                format!("Expected number, received {}", type_name(other)),
            );
            None
        }
    }
}

/// Enforce a minimum length in characters.
fn min_chars<'a>(
    value: &'a str,
    min: usize,
    field: &str,
    message: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    if value.chars().count() < min {
        errors.add(field, message);
        return None;
    }
    Some(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_add_keeps_first_message() {
        let mut errors = ValidationErrors::new();
        errors.add("weight", "first");
        errors.add("weight", "second");
        assert_eq!(errors.get("weight"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("status", "bad");
        errors.add("customerName", "short");
        assert_eq!(
            errors.to_string(),
            "validation failed: customerName: short; status: bad"
        );
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut errors = ValidationErrors::new();
        errors.add("weight", "Weight must be at least 0.1 kg");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, json!({ "weight": "Weight must be at least 0.1 kg" }));
    }

    #[test]
    fn test_as_object_rejects_array() {
        let errors = as_object(&json!([1, 2])).unwrap_err();
        assert_eq!(errors.get(BODY_FIELD), Some("Expected object, received array"));
    }

    #[test]
    fn test_read_string_type_mismatch() {
        let value = json!({ "name": 42, "other": null });
        let map = value.as_object().unwrap();
        let mut errors = ValidationErrors::new();
        assert!(read_string(map, "name", &mut errors).is_none());
        assert!(read_string(map, "other", &mut errors).is_none());
        assert!(read_string(map, "missing", &mut errors).is_none());
        assert_eq!(errors.get("name"), Some("Expected string, received number"));
        assert_eq!(errors.get("other"), Some("Expected string, received null"));
        assert_eq!(errors.get("missing"), Some("Required"));
    }
}
