//! JSON value extraction helpers.
//!
//! API responses arrive loosely shaped: a "title" may be a string, a number,
//! or missing entirely. These helpers give the normalizer one vocabulary for
//! "is this field meaningfully set" and "what is its text", so field
//! precedence can be written as an ordered list of keys.

use serde_json::Value;

/// Extension trait for JSON value extraction
pub trait JsonExt {
    /// Get a string value, returning None if key missing or not a string
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Get an array value, returning None if key missing or not an array
    fn get_array(&self, key: &str) -> Option<&Vec<Value>>;

    /// Whether the value counts as "set" (non-empty string, non-zero number,
    /// `true`, or any array/object).
    fn is_truthy(&self) -> bool;

    /// First key in `keys` whose value is truthy.
    fn first_truthy(&self, keys: &[&str]) -> Option<&Value>;

    /// Text form of a scalar or composite value.
    ///
    /// Strings are returned as-is, numbers and bools use their literal form,
    /// arrays and objects use compact JSON, null is empty.
    fn coerce_string(&self) -> String;
}

impl JsonExt for Value {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(|v| v.as_array())
    }

    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn first_truthy(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.get(*key))
            .find(|v| v.is_truthy())
    }

    fn coerce_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }
}
