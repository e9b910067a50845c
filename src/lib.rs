//! Home Assistant plugin for the haus device-management frontend
//!
//! This crate normalizes the weakly-typed states and service descriptors a
//! Home Assistant hub emits into a fixed, strongly-typed model.
//!
//! # Features
//!
//! - Value-type inference over hub states (booleans, numbers, datetimes)
//! - Entity normalization into typed properties, including colour triples
//!   and tabular attributes such as weather forecasts
//! - Service normalization into typed action fields from selector metadata
//! - Event translation with normalized `new_state`
//! - Snapshot client for offline inspection of a hub

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod plugin;
pub mod services;
pub mod utils;

// Test support modules - available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

// Re-export main types for convenience
pub use config::PluginSettings;
pub use error::{HassError, Result};
pub use models::{Action, DisplayData, Entity, Field, FieldKind, Property, PropertyValue};
pub use plugin::HassPlugin;
