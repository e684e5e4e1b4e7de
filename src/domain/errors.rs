// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when constructing or
//! using a configuration store. All errors use `thiserror` for proper error
//! handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when constructing
/// a store, reading override sources, converting values, or importing JSON.
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// Note that a key absent from every layer is *not* an error: reads return
/// `None` for unknown keys.
///
/// # Examples
///
/// ```
/// use nscfg::domain::errors::ConfigError;
///
/// fn write_attempt() -> Result<(), ConfigError> {
///     Err(ConfigError::ReadOnlyStore {
///         key: "color".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The store was constructed with an empty namespace.
    #[error("configuration namespace must not be empty")]
    EmptyNamespace,

    /// A write was attempted through the store.
    ///
    /// The store is read-only: no write-through to the override source is
    /// defined, and defaults are only replaced wholesale via JSON import.
    #[error("configuration store is read-only: cannot write key '{key}'")]
    ReadOnlyStore {
        /// The key the caller tried to write
        key: String,
    },

    /// Failed to parse configuration input.
    #[error("failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration value had a JSON type the conversion cannot accept.
    #[error("unexpected type for key '{key}': expected {expected}, found {found}")]
    UnexpectedType {
        /// The key being converted
        key: String,
        /// The type the caller asked for
        expected: &'static str,
        /// The JSON type actually stored
        found: &'static str,
    },

    /// An error occurred in an override source.
    #[error("override source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
