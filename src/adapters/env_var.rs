// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable override source adapter.
//!
//! This module provides an adapter that reads per-install overrides from
//! environment variables.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::OverrideSource;
use std::env;

/// Override source adapter for environment variables.
///
/// The fully-qualified key is mapped to an environment variable name by
/// uppercasing it and replacing dots and dashes with underscores, so
/// `"acme.color"` reads `ACME_COLOR`. An optional prefix can be prepended
/// to the variable name.
///
/// Values are always string-typed; use the conversions on
/// [`ConfigValue`] at the point of use.
///
/// # Examples
///
/// ```rust
/// use nscfg::adapters::EnvOverrides;
///
/// // ACME_COLOR overrides "acme.color"
/// let overrides = EnvOverrides::new();
///
/// // CFG_ACME_COLOR overrides "acme.color"
/// let overrides = EnvOverrides::with_prefix("CFG_");
/// ```
#[derive(Debug, Default)]
pub struct EnvOverrides {
    /// Optional prefix prepended to derived variable names
    prefix: Option<String>,
}

impl EnvOverrides {
    /// Creates a new environment variable override source without a prefix.
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates a new environment variable override source with a prefix.
    ///
    /// The prefix is prepended verbatim to the derived variable name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Derives the environment variable name for a fully-qualified key.
    fn env_name(&self, key: &ConfigKey) -> String {
        let name = key.as_str().replace(['.', '-'], "_").to_uppercase();
        match &self.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name,
        }
    }
}

impl OverrideSource for EnvOverrides {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        let name = self.env_name(key);
        match env::var(&name) {
            Ok(value) => Ok(Some(ConfigValue::from(value))),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(err @ env::VarError::NotUnicode(_)) => Err(ConfigError::SourceError {
                source_name: "env".to_string(),
                message: format!("environment variable '{name}' is not valid unicode"),
                source: Some(Box::new(err)),
            }),
        }
    }
}
