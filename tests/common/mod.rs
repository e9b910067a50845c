//! Common test utilities
//!
//! Fixture loading shared by the integration tests.

#![allow(dead_code)]

use haus_hass_plugin::client::{HassEntity, SnapshotClient};
use serde_json::Value;
use std::path::PathBuf;

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build a raw entity record from JSON
pub fn entity(value: Value) -> HassEntity {
    serde_json::from_value(value).expect("valid entity fixture")
}

/// Snapshot client loaded with the captured states and services
pub async fn snapshot_client() -> SnapshotClient {
    SnapshotClient::from_files(
        Some(&fixture_path("states.json")),
        Some(&fixture_path("services.json")),
    )
    .await
    .expect("fixtures load")
}
