// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespaced configuration store implementation.
//!
//! This module provides the `NamespaceConfig` store, which resolves a key to
//! its effective value by layering override-source lookups over static
//! defaults, and the builder used to construct one.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::OverrideSource;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A namespaced, layered configuration store.
///
/// A `NamespaceConfig` holds a namespace identity, a shared reference to a
/// per-install [`OverrideSource`], and an insertion-ordered map of default
/// key-value pairs. A read of key `k` first queries the override source for
/// `"<namespace>.k"`; a non-null override wins unconditionally, otherwise the
/// default for `k` applies, and a key absent from both layers reads as
/// `None`.
///
/// Reads are never cached, so changes in the override source are visible on
/// the very next read. The defaults map sits behind a read-write lock:
/// readers run concurrently and only [`from_json`](Self::from_json) takes
/// the write side.
///
/// The store is read-only: [`set`](Self::set) always fails. Defaults are
/// replaced wholesale via [`from_json`](Self::from_json), and the override
/// source is never written through.
///
/// # Examples
///
/// ```rust
/// use nscfg::prelude::*;
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let overrides = Arc::new(MemoryOverrides::new());
/// overrides.set("acme.color", "red");
///
/// let config = NamespaceConfig::builder("acme", overrides)
///     .with_default("color", "blue")
///     .with_default("limit", 10)
///     .build()?;
///
/// assert_eq!(config.get("color").unwrap().as_str(), Some("red"));
/// assert_eq!(config.get("limit").unwrap().as_i64("limit").unwrap(), 10);
/// assert!(config.get("missing").is_none());
/// # Ok(())
/// # }
/// ```
pub struct NamespaceConfig {
    /// Namespace identity, used to build override lookup keys
    namespace: String,
    /// The per-install override layer; shared, never mutated by the store
    overrides: Arc<dyn OverrideSource>,
    /// Default key-value pairs, replaced wholesale by `from_json` only
    defaults: RwLock<Map<String, Value>>,
}

impl NamespaceConfig {
    /// Creates a new store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyNamespace`] if `namespace` is empty.
    pub fn new(
        namespace: impl Into<String>,
        overrides: Arc<dyn OverrideSource>,
        defaults: Map<String, Value>,
    ) -> Result<Self> {
        let namespace = namespace.into();
        if namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        Ok(Self {
            namespace,
            overrides,
            defaults: RwLock::new(defaults),
        })
    }

    /// Creates a builder for a store with the given namespace and override
    /// source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nscfg::prelude::*;
    /// use std::sync::Arc;
    ///
    /// # fn main() -> Result<()> {
    /// let config = NamespaceConfig::builder("acme", Arc::new(MemoryOverrides::new()))
    ///     .with_default("color", "blue")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(
        namespace: impl Into<String>,
        overrides: Arc<dyn OverrideSource>,
    ) -> NamespaceConfigBuilder {
        NamespaceConfigBuilder {
            namespace: namespace.into(),
            overrides,
            defaults: Map::new(),
        }
    }

    /// Returns the store's namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolves a key to its effective value.
    ///
    /// The override source is queried under `"<namespace>.<key>"` first; a
    /// non-null override wins unconditionally, including over a present
    /// default. Otherwise the default for `key` applies. `None` means the key
    /// is set in neither layer - absence is a legitimate outcome, not an
    /// error.
    ///
    /// An override explicitly set to null is indistinguishable from "not
    /// set" and falls through to the default layer. A failing override
    /// source is logged and likewise treated as not-set.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        let qualified = ConfigKey::namespaced(&self.namespace, key);
        match self.overrides.get(&qualified) {
            Ok(Some(value)) if !value.is_null() => return Some(value),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(
                    "error querying override source '{}' for key '{}': {}",
                    self.overrides.name(),
                    qualified,
                    e
                );
            }
        }
        self.defaults.read().get(key).cloned().map(ConfigValue::new)
    }

    /// Resolves a key, falling back to the given value when set in neither
    /// layer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nscfg::prelude::*;
    /// use std::sync::Arc;
    ///
    /// # fn main() -> Result<()> {
    /// let config = NamespaceConfig::builder("acme", Arc::new(MemoryOverrides::new()))
    ///     .build()?;
    ///
    /// let level = config.get_or_default("log.level", "info");
    /// assert_eq!(level.as_str(), Some("info"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_or_default(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Returns `true` if the key resolves to a value in either layer.
    ///
    /// This follows full resolution: a key present only as an override and a
    /// key present only in the defaults both report `true`. Use
    /// [`has_default`](Self::has_default) to ask specifically about the
    /// defaults layer.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the key is present in the defaults map.
    ///
    /// This is also the key set that [`to_json`](Self::to_json) exports.
    pub fn has_default(&self, key: &str) -> bool {
        self.defaults.read().contains_key(key)
    }

    /// Returns the keys of the defaults map, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.defaults.read().keys().cloned().collect()
    }

    /// Writes a value through the store.
    ///
    /// # Errors
    ///
    /// Always fails with [`ConfigError::ReadOnlyStore`]: no write path
    /// through this store is defined. Defaults can only be replaced
    /// wholesale via [`from_json`](Self::from_json).
    pub fn set(&self, key: &str, _value: impl Into<ConfigValue>) -> Result<()> {
        Err(ConfigError::ReadOnlyStore {
            key: key.to_string(),
        })
    }

    /// Exports the store as a JSON object.
    ///
    /// The object's keys are exactly the keys of the defaults map; each value
    /// is the resolved (override-aware) value for that key. Keys that exist
    /// only as overrides are not exported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nscfg::prelude::*;
    /// use std::sync::Arc;
    ///
    /// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    /// let overrides = Arc::new(MemoryOverrides::new());
    /// overrides.set("acme.color", "red");
    ///
    /// let config = NamespaceConfig::builder("acme", overrides)
    ///     .with_default("color", "blue")
    ///     .with_default("limit", 10)
    ///     .build()?;
    ///
    /// let parsed: serde_json::Value = serde_json::from_str(&config.to_json()?)?;
    /// assert_eq!(parsed["color"], "red");
    /// assert_eq!(parsed["limit"], 10);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_json(&self) -> Result<String> {
        let mut resolved = Map::new();
        for key in self.keys() {
            let value = self
                .get(&key)
                .map(ConfigValue::into_value)
                .unwrap_or(Value::Null);
            resolved.insert(key, value);
        }
        serde_json::to_string(&Value::Object(resolved)).map_err(ConfigError::from)
    }

    /// Replaces the defaults map wholesale from a JSON object.
    ///
    /// This is the only supported mutation path. There is no merge with the
    /// prior defaults, and overrides are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if `json` is malformed or not a
    /// JSON object; the prior defaults are left fully intact in that case.
    pub fn from_json(&self, json: &str) -> Result<()> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(ConfigError::ParseError {
                message: "expected a JSON object".to_string(),
                source: None,
            });
        };
        tracing::debug!(
            "replacing {} default entries for namespace '{}'",
            map.len(),
            self.namespace
        );
        *self.defaults.write() = map;
        Ok(())
    }
}

impl fmt::Debug for NamespaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceConfig")
            .field("namespace", &self.namespace)
            .field("overrides", &self.overrides.name())
            .field("defaults", &*self.defaults.read())
            .finish()
    }
}

/// Builder for constructing a [`NamespaceConfig`].
///
/// This builder provides a fluent interface for seeding the defaults map,
/// which is commonly produced by the owning service's static configuration.
///
/// # Examples
///
/// ```rust
/// use nscfg::prelude::*;
/// use std::sync::Arc;
///
/// # fn main() -> Result<()> {
/// let config = NamespaceConfig::builder("acme", Arc::new(MemoryOverrides::new()))
///     .with_default("color", "blue")
///     .with_default("limit", 10)
///     .build()?;
///
/// assert_eq!(config.keys(), vec!["color".to_string(), "limit".to_string()]);
/// # Ok(())
/// # }
/// ```
pub struct NamespaceConfigBuilder {
    namespace: String,
    overrides: Arc<dyn OverrideSource>,
    defaults: Map<String, Value>,
}

impl NamespaceConfigBuilder {
    /// Adds a single default key-value pair.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Extends the defaults with every entry of the given map.
    pub fn with_defaults(mut self, defaults: Map<String, Value>) -> Self {
        self.defaults.extend(defaults);
        self
    }

    /// Builds the store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyNamespace`] if the namespace is empty.
    pub fn build(self) -> Result<NamespaceConfig> {
        NamespaceConfig::new(self.namespace, self.overrides, self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryOverrides;
    use serde_json::json;

    // Override source that always fails, for fall-through behavior
    struct FailingSource;

    impl OverrideSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
            Err(ConfigError::SourceError {
                source_name: "failing".to_string(),
                message: format!("cannot answer lookup for '{key}'"),
                source: None,
            })
        }
    }

    fn store_with_overrides() -> (Arc<MemoryOverrides>, NamespaceConfig) {
        let overrides = Arc::new(MemoryOverrides::new());
        let config = NamespaceConfig::builder("acme", overrides.clone())
            .with_default("color", "blue")
            .with_default("limit", 10)
            .build()
            .unwrap();
        (overrides, config)
    }

    #[test]
    fn test_new_rejects_empty_namespace() {
        let result = NamespaceConfig::new("", Arc::new(MemoryOverrides::new()), Map::new());
        assert!(matches!(result, Err(ConfigError::EmptyNamespace)));
    }

    #[test]
    fn test_builder_rejects_empty_namespace() {
        let result = NamespaceConfig::builder("", Arc::new(MemoryOverrides::new())).build();
        assert!(matches!(result, Err(ConfigError::EmptyNamespace)));
    }

    #[test]
    fn test_get_from_defaults() {
        let (_, config) = store_with_overrides();
        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
        assert_eq!(config.get("limit").unwrap().as_i64("limit").unwrap(), 10);
    }

    #[test]
    fn test_get_override_wins() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.color", "red");

        assert_eq!(config.get("color").unwrap().as_str(), Some("red"));
        // untouched key still resolves from defaults
        assert_eq!(config.get("limit").unwrap().as_i64("limit").unwrap(), 10);
    }

    #[test]
    fn test_get_override_only_key() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.extra", "surprise");

        assert_eq!(config.get("extra").unwrap().as_str(), Some("surprise"));
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_, config) = store_with_overrides();
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_get_null_override_falls_through() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.color", ConfigValue::null());

        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
    }

    #[test]
    fn test_get_uses_qualified_keys_only() {
        let (overrides, config) = store_with_overrides();
        // an unqualified entry must not shadow anything
        overrides.set("color", "red");

        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
    }

    #[test]
    fn test_get_no_caching_between_reads() {
        let (overrides, config) = store_with_overrides();
        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));

        overrides.set("acme.color", "red");
        assert_eq!(config.get("color").unwrap().as_str(), Some("red"));

        overrides.remove("acme.color");
        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
    }

    #[test]
    fn test_get_failing_source_falls_through() {
        let config = NamespaceConfig::builder("acme", Arc::new(FailingSource))
            .with_default("color", "blue")
            .build()
            .unwrap();

        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_get_or_default() {
        let (_, config) = store_with_overrides();
        assert_eq!(
            config.get_or_default("color", "green").as_str(),
            Some("blue")
        );
        assert_eq!(
            config.get_or_default("missing", "green").as_str(),
            Some("green")
        );
    }

    #[test]
    fn test_contains_full_resolution() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.extra", 1);

        assert!(config.contains("color"));
        assert!(config.contains("extra"));
        assert!(!config.contains("missing"));
    }

    #[test]
    fn test_has_default_ignores_overrides() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.extra", 1);

        assert!(config.has_default("color"));
        assert!(!config.has_default("extra"));
    }

    #[test]
    fn test_keys_in_insertion_order() {
        let (_, config) = store_with_overrides();
        assert_eq!(config.keys(), vec!["color".to_string(), "limit".to_string()]);
    }

    #[test]
    fn test_set_always_fails() {
        let (overrides, config) = store_with_overrides();
        let result = config.set("color", "green");
        assert!(matches!(result, Err(ConfigError::ReadOnlyStore { .. })));

        // neither layer was touched
        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_to_json_resolves_overrides() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.color", "red");

        let parsed: Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, json!({"color": "red", "limit": 10}));
    }

    #[test]
    fn test_to_json_skips_override_only_keys() {
        let (overrides, config) = store_with_overrides();
        overrides.set("acme.extra", "surprise");

        let parsed: Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, json!({"color": "blue", "limit": 10}));
    }

    #[test]
    fn test_from_json_replaces_wholesale() {
        let (_, config) = store_with_overrides();
        config.from_json(r#"{"a": 1, "b": "x"}"#).unwrap();

        assert_eq!(config.get("a").unwrap().as_i64("a").unwrap(), 1);
        assert_eq!(config.get("b").unwrap().as_str(), Some("x"));
        assert!(config.has_default("a"));
        // prior defaults are gone, not merged
        assert!(config.get("color").is_none());
        assert!(config.get("limit").is_none());
    }

    #[test]
    fn test_from_json_malformed_leaves_defaults_intact() {
        let (_, config) = store_with_overrides();
        let result = config.from_json("not json");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
        assert_eq!(config.get("limit").unwrap().as_i64("limit").unwrap(), 10);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let (_, config) = store_with_overrides();
        for doc in ["[1, 2]", "\"x\"", "3", "null"] {
            let result = config.from_json(doc);
            assert!(
                matches!(result, Err(ConfigError::ParseError { .. })),
                "accepted non-object document: {}",
                doc
            );
        }
        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
    }

    #[test]
    fn test_round_trip_preserves_unoverridden_values() {
        let (_, config) = store_with_overrides();
        let exported = config.to_json().unwrap();
        config.from_json(&exported).unwrap();

        assert_eq!(config.get("color").unwrap().as_str(), Some("blue"));
        assert_eq!(config.get("limit").unwrap().as_i64("limit").unwrap(), 10);
        assert_eq!(config.keys(), vec!["color".to_string(), "limit".to_string()]);
    }

    #[test]
    fn test_namespace_accessor() {
        let (_, config) = store_with_overrides();
        assert_eq!(config.namespace(), "acme");
    }

    #[test]
    fn test_debug_names_source() {
        let (_, config) = store_with_overrides();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("acme"));
        assert!(rendered.contains("memory"));
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NamespaceConfig>();
    }
}
