//! Client backed by captured `get_states` / `get_services` payloads
//!
//! Useful for offline inspection of a hub and for tests. Service calls are
//! recorded and logged instead of being sent anywhere.

use super::{HassClient, HassEntity, HassServices, ServiceTarget};
use crate::error::{HassError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// A service call captured by [`SnapshotClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub target: ServiceTarget,
    pub data: Map<String, Value>,
}

/// Snapshot files hold either the bare payload or the websocket result
/// envelope it arrived in.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Envelope { success: bool, result: T },
    Raw(T),
}

impl<T> Payload<T> {
    fn into_result(self, what: &str) -> Result<T> {
        match self {
            Payload::Envelope { success: true, result } => Ok(result),
            Payload::Envelope { success: false, .. } => Err(HassError::invalid_input(format!(
                "{what} snapshot holds a failed result"
            ))),
            Payload::Raw(result) => Ok(result),
        }
    }
}

/// [`HassClient`] serving fixed states and services
#[derive(Debug, Default)]
pub struct SnapshotClient {
    states: Vec<HassEntity>,
    services: HassServices,
    calls: Mutex<Vec<ServiceCall>>,
}

impl SnapshotClient {
    /// Create a client from in-memory records
    pub fn new(states: Vec<HassEntity>, services: HassServices) -> Self {
        Self {
            states,
            services,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Load snapshot files; a missing path means an empty snapshot
    pub async fn from_files(
        states_path: Option<&Path>,
        services_path: Option<&Path>,
    ) -> Result<Self> {
        let states = match states_path {
            Some(path) => load_payload(path, "states").await?,
            None => Vec::new(),
        };
        let services = match services_path {
            Some(path) => load_payload(path, "services").await?,
            None => HassServices::new(),
        };

        info!(
            "Loaded snapshot with {} entities and {} service domains",
            states.len(),
            services.len()
        );

        Ok(Self::new(states, services))
    }

    /// Service calls received so far, oldest first
    pub async fn recorded_calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().await.clone()
    }
}

async fn load_payload<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        HassError::config(format!(
            "Failed to read {what} snapshot {}: {e}",
            path.display()
        ))
    })?;
    debug!("Parsing {} snapshot from {}", what, path.display());
    serde_json::from_str::<Payload<T>>(&content)?.into_result(what)
}

#[async_trait]
impl HassClient for SnapshotClient {
    async fn fetch_states(&self) -> Result<Vec<HassEntity>> {
        Ok(self.states.clone())
    }

    async fn fetch_services(&self) -> Result<HassServices> {
        Ok(self.services.clone())
    }

    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        target: ServiceTarget,
        data: Map<String, Value>,
    ) -> Result<()> {
        info!(
            domain,
            service,
            target = ?target.entity_id,
            "Recording service call against snapshot"
        );
        self.calls.lock().await.push(ServiceCall {
            domain: domain.to_string(),
            service: service.to_string(),
            target,
            data,
        });
        Ok(())
    }
}
