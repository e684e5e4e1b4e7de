// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! This module provides the `NamespaceConfig` store, which layers a
//! per-install override source over compiled-in defaults, and its builder.

pub mod store;

pub use store::{NamespaceConfig, NamespaceConfigBuilder};
