// SPDX-License-Identifier: MIT OR Apache-2.0

//! A namespaced, layered configuration store.
//!
//! This crate provides a key-value configuration store whose values come from
//! two layers: a per-install override source (outranking) and a set of
//! compiled-in defaults (fallback). Client code reads a value by key without
//! needing to know which layer supplied it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, errors)
//! - **Ports**: Trait definitions that define interfaces (`OverrideSource`)
//! - **Adapters**: Override-source implementations (in-memory map, env vars)
//! - **Service**: The `NamespaceConfig` store that layers overrides over defaults
//!
//! # Resolution
//!
//! A read of key `k` on a store with namespace `ns` first asks the override
//! source for `"ns.k"`; a non-null override wins unconditionally. Otherwise
//! the store's own defaults are consulted, and a key absent from both layers
//! reads as `None` rather than an error. Nothing is cached, so changes to the
//! override source are visible on the very next read.
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment-variable override adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use nscfg::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let overrides = Arc::new(MemoryOverrides::new());
//! overrides.set("acme.color", "red");
//!
//! let config = NamespaceConfig::builder("acme", overrides)
//!     .with_default("color", "blue")
//!     .with_default("limit", 10)
//!     .build()?;
//!
//! assert_eq!(config.get("color").unwrap().as_str(), Some("red"));
//! assert_eq!(config.get("limit").unwrap().as_i64("limit")?, 10);
//! assert!(config.get("missing").is_none());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
    pub use crate::ports::OverrideSource;
    pub use crate::service::{NamespaceConfig, NamespaceConfigBuilder};

    pub use crate::adapters::MemoryOverrides;

    #[cfg(feature = "env")]
    pub use crate::adapters::EnvOverrides;
}
