// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! This module provides the `ConfigValue` type, which wraps a dynamically-typed
//! JSON value and provides type-safe conversion methods to common Rust types.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A type-safe wrapper for configuration values.
///
/// `ConfigValue` stores values as [`serde_json::Value`] internally, so a value
/// may be a string, number, boolean, null, or nested structure. Conversion
/// methods accept the key being converted so that error messages can name it.
///
/// Override sources frequently hand back strings (environment variables, host
/// settings tables), so the numeric and boolean conversions also parse
/// string-typed values.
///
/// # Examples
///
/// ```
/// use nscfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_i64("test.key").unwrap(), 42);
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_i64("test.key").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(Value);

/// Human-readable name of a JSON value kind, for error messages.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ConfigValue {
    /// Creates a new `ConfigValue` from a raw JSON value.
    pub fn new(value: Value) -> Self {
        ConfigValue(value)
    }

    /// Creates a null `ConfigValue`.
    pub fn null() -> Self {
        ConfigValue(Value::Null)
    }

    /// Returns `true` if the wrapped value is JSON null.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Returns a reference to the wrapped JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Converts the `ConfigValue` into its inner JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns the value as a string slice if it is a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use nscfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    ///
    /// let value = ConfigValue::from(5);
    /// assert_eq!(value.as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Converts the value to an owned `String`.
    ///
    /// Strings are returned as-is; numbers and booleans are rendered in their
    /// display form. Null, arrays, and objects do not convert.
    pub fn as_string(&self, key: &str) -> Result<String> {
        match &self.0 {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "string",
                found: json_type(other),
            }),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// JSON booleans convert directly. String values recognize the following
    /// forms (case-insensitive):
    ///
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// Numbers convert when they are exactly `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nscfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from(true);
    /// assert_eq!(value.as_bool("test.key").unwrap(), true);
    ///
    /// let value = ConfigValue::from("yes");
    /// assert_eq!(value.as_bool("test.key").unwrap(), true);
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match &self.0 {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(true),
                "false" | "no" | "0" | "off" => Ok(false),
                _ => s
                    .parse::<bool>()
                    .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
            },
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(ConfigError::UnexpectedType {
                    key: key.to_string(),
                    expected: "boolean",
                    found: "number",
                }),
            },
            other => Err(ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "boolean",
                found: json_type(other),
            }),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nscfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from(42);
    /// assert_eq!(value.as_i64("test.key").unwrap(), 42);
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match &self.0 {
            Value::Number(n) => n.as_i64().ok_or_else(|| ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "integer",
                found: "number",
            }),
            Value::String(s) => s
                .parse::<i64>()
                .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e)),
            other => Err(ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "integer",
                found: json_type(other),
            }),
        }
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        match &self.0 {
            Value::Number(n) => n.as_u64().ok_or_else(|| ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "unsigned integer",
                found: "number",
            }),
            Value::String(s) => s
                .parse::<u64>()
                .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e)),
            other => Err(ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "unsigned integer",
                found: json_type(other),
            }),
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nscfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("3.14");
    /// assert_eq!(value.as_f64("test.key").unwrap(), 3.14);
    /// ```
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match &self.0 {
            Value::Number(n) => n.as_f64().ok_or_else(|| ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "float",
                found: "number",
            }),
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e)),
            other => Err(ConfigError::UnexpectedType {
                key: key.to_string(),
                expected: "float",
                found: json_type(other),
            }),
        }
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        ConfigValue(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(Value::from(s))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(Value::from(s))
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue(Value::from(b))
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue(Value::from(n))
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue(Value::from(n))
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue(Value::from(n))
    }
}

impl From<ConfigValue> for Value {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_value_new() {
        let value = ConfigValue::new(json!("test"));
        assert_eq!(value.as_str(), Some("test"));
    }

    #[test]
    fn test_config_value_null() {
        let value = ConfigValue::null();
        assert!(value.is_null());
    }

    #[test]
    fn test_config_value_from_str() {
        let value = ConfigValue::from("test");
        assert_eq!(value.as_str(), Some("test"));
    }

    #[test]
    fn test_config_value_display_string_is_raw() {
        let value = ConfigValue::from("test");
        assert_eq!(format!("{}", value), "test");
    }

    #[test]
    fn test_config_value_display_number() {
        let value = ConfigValue::from(42);
        assert_eq!(format!("{}", value), "42");
    }

    #[test]
    fn test_as_string_from_scalars() {
        assert_eq!(ConfigValue::from("x").as_string("k").unwrap(), "x");
        assert_eq!(ConfigValue::from(10).as_string("k").unwrap(), "10");
        assert_eq!(ConfigValue::from(true).as_string("k").unwrap(), "true");
    }

    #[test]
    fn test_as_string_rejects_structures() {
        let value = ConfigValue::new(json!({"a": 1}));
        assert!(value.as_string("k").is_err());
    }

    #[test]
    fn test_as_bool_native() {
        assert_eq!(ConfigValue::from(true).as_bool("k").unwrap(), true);
        assert_eq!(ConfigValue::from(false).as_bool("k").unwrap(), false);
    }

    #[test]
    fn test_as_bool_string_true_variants() {
        for val in ["true", "True", "TRUE", "yes", "Yes", "1", "on", "On"] {
            let value = ConfigValue::from(val);
            assert_eq!(value.as_bool("k").unwrap(), true, "failed for: {}", val);
        }
    }

    #[test]
    fn test_as_bool_string_false_variants() {
        for val in ["false", "False", "FALSE", "no", "No", "0", "off", "Off"] {
            let value = ConfigValue::from(val);
            assert_eq!(value.as_bool("k").unwrap(), false, "failed for: {}", val);
        }
    }

    #[test]
    fn test_as_bool_numeric() {
        assert_eq!(ConfigValue::from(0).as_bool("k").unwrap(), false);
        assert_eq!(ConfigValue::from(1).as_bool("k").unwrap(), true);
        assert!(ConfigValue::from(2).as_bool("k").is_err());
    }

    #[test]
    fn test_as_bool_invalid() {
        let value = ConfigValue::from("invalid");
        assert!(value.as_bool("k").is_err());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(ConfigValue::from(42).as_i64("k").unwrap(), 42);
        assert_eq!(ConfigValue::from(-42).as_i64("k").unwrap(), -42);
        assert_eq!(ConfigValue::from("42").as_i64("k").unwrap(), 42);
    }

    #[test]
    fn test_as_i64_invalid() {
        assert!(ConfigValue::from("not_a_number").as_i64("k").is_err());
        assert!(ConfigValue::from(3.5).as_i64("k").is_err());
        assert!(ConfigValue::from(true).as_i64("k").is_err());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(ConfigValue::from(42).as_u64("k").unwrap(), 42);
        assert_eq!(ConfigValue::from("42").as_u64("k").unwrap(), 42);
    }

    #[test]
    fn test_as_u64_invalid() {
        assert!(ConfigValue::from(-42).as_u64("k").is_err());
        assert!(ConfigValue::from("-42").as_u64("k").is_err());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(ConfigValue::from(3.5).as_f64("k").unwrap(), 3.5);
        assert_eq!(ConfigValue::from("3.5").as_f64("k").unwrap(), 3.5);
        assert_eq!(ConfigValue::from(42).as_f64("k").unwrap(), 42.0);
    }

    #[test]
    fn test_as_f64_invalid() {
        assert!(ConfigValue::from("not_a_number").as_f64("k").is_err());
        assert!(ConfigValue::null().as_f64("k").is_err());
    }

    #[test]
    fn test_nested_value_round_trips() {
        let value = ConfigValue::new(json!({"host": "localhost", "port": 5432}));
        let inner: Value = value.clone().into_value();
        assert_eq!(inner["port"], json!(5432));
        assert_eq!(value.as_value()["host"], json!("localhost"));
    }

    #[test]
    fn test_serde_transparent() {
        let value = ConfigValue::from("red");
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, "\"red\"");

        let decoded: ConfigValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_equality() {
        assert_eq!(ConfigValue::from("a"), ConfigValue::from("a"));
        assert_ne!(ConfigValue::from("a"), ConfigValue::from("b"));
        assert_ne!(ConfigValue::from("1"), ConfigValue::from(1));
    }
}
