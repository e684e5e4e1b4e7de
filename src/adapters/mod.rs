// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing override source implementations.
//!
//! This module contains concrete implementations of the override source
//! trait defined in the ports layer. Each adapter implements the
//! `OverrideSource` trait to provide per-install overrides from a specific
//! backend.

#[cfg(feature = "env")]
pub mod env_var;
pub mod memory;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvOverrides;
pub use memory::MemoryOverrides;
