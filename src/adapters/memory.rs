// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory override source adapter.
//!
//! This module provides an adapter backed by an in-process map, modeling a
//! host environment's settings cache. The host mutates the map through this
//! adapter's own methods; the configuration store only ever reads it.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::OverrideSource;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Override source adapter backed by an in-process map.
///
/// Keys are fully-qualified (`"<namespace>.<key>"`), matching how a store
/// addresses its override layer. Mutations made through [`set`](Self::set),
/// [`remove`](Self::remove), and [`clear`](Self::clear) are visible to the
/// next read of any store holding this adapter, since stores never cache.
///
/// # Examples
///
/// ```rust
/// use nscfg::adapters::MemoryOverrides;
/// use nscfg::ports::OverrideSource;
///
/// let overrides = MemoryOverrides::new();
/// overrides.set("acme.color", "red");
///
/// assert!(overrides.get_str("acme.color").unwrap().is_some());
/// assert!(overrides.get_str("acme.limit").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryOverrides {
    values: RwLock<HashMap<String, ConfigValue>>,
}

impl MemoryOverrides {
    /// Creates a new, empty in-memory override source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an override under the given fully-qualified key.
    pub fn set(&self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.write().insert(key.into(), value.into());
    }

    /// Removes the override under the given fully-qualified key.
    ///
    /// Returns the removed value, if one was set.
    pub fn remove(&self, key: &str) -> Option<ConfigValue> {
        self.values.write().remove(key)
    }

    /// Removes every override.
    pub fn clear(&self) {
        self.values.write().clear();
    }

    /// Returns the number of overrides currently set.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Returns `true` if no overrides are set.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl OverrideSource for MemoryOverrides {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.values.read().get(key.as_str()).cloned())
    }
}
