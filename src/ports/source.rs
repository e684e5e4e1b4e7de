// SPDX-License-Identifier: MIT OR Apache-2.0

//! Override source trait definition.
//!
//! This module defines the `OverrideSource` trait, the port through which a
//! configuration store queries its per-install override layer. Any override
//! backend (an in-process settings cache, environment variables, a host
//! settings table) implements this trait.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for per-install override sources.
///
/// An override source is a key-value lookup maintained by the host
/// environment. The store addresses it exclusively with fully-qualified keys
/// of the form `"<namespace>.<key>"` and never mutates it.
///
/// Returning `Ok(None)` is the explicit "not set" signal; it is never
/// conflated with a stored null value.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use nscfg::ports::OverrideSource;
/// use nscfg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct PinnedSource;
///
/// impl OverrideSource for PinnedSource {
///     fn name(&self) -> &str {
///         "pinned"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         if key.as_str() == "acme.color" {
///             Ok(Some(ConfigValue::from("red")))
///         } else {
///             Ok(None)
///         }
///     }
/// }
///
/// let source = PinnedSource;
/// assert!(source.get_str("acme.color").unwrap().is_some());
/// assert!(source.get_str("acme.limit").unwrap().is_none());
/// ```
pub trait OverrideSource: Send + Sync {
    /// Returns the name of this override source.
    ///
    /// The name is used for logging and error messages. It should be a short,
    /// descriptive identifier like "memory" or "env".
    fn name(&self) -> &str;

    /// Retrieves the override value for the given fully-qualified key.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ConfigValue))` - An override is set for the key
    /// * `Ok(None)` - No override is set for the key
    /// * `Err(ConfigError)` - The source could not answer the lookup
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Retrieves the override value for the given key string.
    ///
    /// This is a convenience method that converts a string slice into a
    /// [`ConfigKey`]. It's equivalent to calling `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}
