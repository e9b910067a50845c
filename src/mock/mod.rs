//! Mock implementations for testing
//!
//! This module provides a mock hub client for testing purposes.

use crate::client::{HassClient, HassEntity, HassServices, ServiceCall, ServiceTarget};
use crate::error::{HassError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Mock Home Assistant client for testing
#[derive(Default)]
pub struct MockHassClient {
    states: Vec<HassEntity>,
    services: HassServices,
    offline: AtomicBool,
    fetch_count: AtomicUsize,
    calls: Mutex<Vec<ServiceCall>>,
}

impl MockHassClient {
    /// Create new mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Set mock entity states
    pub fn with_states(mut self, states: Vec<HassEntity>) -> Self {
        self.states = states;
        self
    }

    /// Set mock service descriptors
    pub fn with_services(mut self, services: HassServices) -> Self {
        self.services = services;
        self
    }

    /// Make every request fail as if the hub were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of fetch requests received
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Service calls received so far, oldest first
    pub async fn recorded_calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().await.clone()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(HassError::connection("Mock hub is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl HassClient for MockHassClient {
    async fn fetch_states(&self) -> Result<Vec<HassEntity>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.states.clone())
    }

    async fn fetch_services(&self) -> Result<HassServices> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.services.clone())
    }

    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        target: ServiceTarget,
        data: Map<String, Value>,
    ) -> Result<()> {
        self.check_online()?;
        self.calls.lock().await.push(ServiceCall {
            domain: domain.to_string(),
            service: service.to_string(),
            target,
            data,
        });
        Ok(())
    }
}
