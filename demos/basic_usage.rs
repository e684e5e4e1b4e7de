// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the nscfg crate.
//!
//! This example demonstrates:
//! - Building a namespaced store over an override source
//! - Override-over-default resolution
//! - Type conversions (string, int, bool)
//! - JSON export and import of the effective configuration
//!
//! To run this example:
//! ```bash
//! # Optionally override a default from the environment
//! export ACME_COLOR="red"
//! export ACME_LIMIT="42"
//!
//! # Run the example
//! cargo run --example basic_usage --features env
//! ```

use nscfg::prelude::*;
use std::sync::Arc;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== nscfg: Basic Usage ===\n");

    // The override layer: environment variables. "acme.color" reads ACME_COLOR.
    let config = NamespaceConfig::builder("acme", Arc::new(EnvOverrides::new()))
        .with_default("color", "blue")
        .with_default("limit", 10)
        .with_default("verbose", false)
        .build()?;

    println!("--- Example 1: Resolution ---");
    for key in config.keys() {
        match config.get(&key) {
            Some(value) => println!("  {key} = {value}"),
            None => println!("  {key} is unset"),
        }
    }

    println!("\n--- Example 2: Typed Reads ---");
    let limit = config.get("limit").expect("limit has a default");
    println!("  limit as i64: {}", limit.as_i64("limit")?);
    let verbose = config.get("verbose").expect("verbose has a default");
    println!("  verbose as bool: {}", verbose.as_bool("verbose")?);

    println!("\n--- Example 3: Absent Keys ---");
    match config.get("missing") {
        Some(value) => println!("  missing = {value}"),
        None => println!("  'missing' is set in neither layer (not an error)"),
    }
    let fallback = config.get_or_default("missing", "fallback");
    println!("  with get_or_default: {fallback}");

    println!("\n--- Example 4: Writes Are Refused ---");
    match config.set("color", "green") {
        Ok(()) => println!("  unexpected: write succeeded"),
        Err(e) => println!("  write refused: {e}"),
    }

    println!("\n--- Example 5: JSON Export / Import ---");
    let exported = config.to_json()?;
    println!("  exported: {exported}");
    config.from_json(r#"{"color": "teal", "limit": 99}"#)?;
    println!("  after import, color = {}", config.get("color").unwrap());

    println!("\n=== Example Complete ===");
    println!("\nTip: Try setting ACME_COLOR or ACME_LIMIT and running again!");

    Ok(())
}
