// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String`
//! that provides type safety for configuration keys, plus the namespaced form
//! used to address a per-install override source.

use std::fmt;

/// A type-safe wrapper for configuration keys.
///
/// `ConfigKey` wraps a `String` to prevent accidental mixing of configuration
/// keys with other string values. Override sources are always addressed with
/// the fully-qualified form produced by [`ConfigKey::namespaced`].
///
/// # Examples
///
/// ```
/// use nscfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::namespaced("acme", "color");
/// assert_eq!(key.as_str(), "acme.color");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Builds the fully-qualified lookup key `"<namespace>.<key>"`.
    ///
    /// This is the form a [`NamespaceConfig`](crate::service::NamespaceConfig)
    /// uses to address its override source.
    ///
    /// # Examples
    ///
    /// ```
    /// use nscfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::namespaced("acme", "limit");
    /// assert_eq!(key.as_str(), "acme.limit");
    /// ```
    pub fn namespaced(namespace: &str, key: &str) -> Self {
        ConfigKey(format!("{namespace}.{key}"))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
