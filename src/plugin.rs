//! Home Assistant plugin boundary
//!
//! Fetches raw records through a [`HassClient`] and hands normalized
//! entities, actions and events to the haus host.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::client::{HassClient, HassEvent, ServiceTarget};
use crate::error::{HassError, Result};
use crate::models::{Action, Entity, PluginEvent};
use crate::services::{transform_action, transform_entity, transform_event};

/// Home Assistant plugin
#[derive(Clone)]
pub struct HassPlugin {
    client: Arc<dyn HassClient>,
}

impl HassPlugin {
    /// Create a plugin on top of an already connected client
    pub fn new(client: Arc<dyn HassClient>) -> Self {
        Self { client }
    }

    /// Normalized entities, restricted to `ids` when given.
    ///
    /// A failed fetch yields an empty list.
    pub async fn list_entities(&self, ids: Option<&[String]>) -> Vec<Entity> {
        let states = match self.client.fetch_states().await {
            Ok(states) => states,
            Err(e) => {
                warn!(
                    error = %e.sanitized_message(),
                    code = e.to_error_code().as_number(),
                    "Failed to fetch entity states"
                );
                return Vec::new();
            }
        };

        let entities: Vec<Entity> = states
            .iter()
            .filter(|state| is_selected(ids, &state.entity_id))
            .map(transform_entity)
            .collect();

        debug!(
            fetched = states.len(),
            returned = entities.len(),
            "Listed entities"
        );
        entities
    }

    /// Normalized actions, restricted to `domain.service` ids when given.
    ///
    /// A failed fetch yields an empty list.
    pub async fn list_actions(&self, ids: Option<&[String]>) -> Vec<Action> {
        let services = match self.client.fetch_services().await {
            Ok(services) => services,
            Err(e) => {
                warn!(
                    error = %e.sanitized_message(),
                    code = e.to_error_code().as_number(),
                    "Failed to fetch services"
                );
                return Vec::new();
            }
        };

        let actions: Vec<Action> = services
            .iter()
            .flat_map(|(domain, services)| {
                services
                    .iter()
                    .map(move |(service, descriptor)| (domain, service, descriptor))
            })
            .filter(|(domain, service, _)| is_selected(ids, &format!("{domain}.{service}")))
            .map(|(domain, service, descriptor)| transform_action(domain, service, descriptor))
            .collect();

        debug!(returned = actions.len(), "Listed actions");
        actions
    }

    /// Forward an action to the hub.
    ///
    /// `action_id` is split on its first `.` into domain and service. Fields
    /// holding `null` are left out of the call.
    pub async fn invoke_action(
        &self,
        action_id: &str,
        target: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<()> {
        let (domain, service) = action_id.split_once('.').ok_or_else(|| {
            HassError::invalid_input(format!(
                "Action id '{action_id}' is not of the form domain.service"
            ))
        })?;

        let target = target
            .filter(|entity_id| !entity_id.is_empty())
            .map(ServiceTarget::entity)
            .unwrap_or_default();
        let data: Map<String, Value> = fields.into_iter().filter(|(_, v)| !v.is_null()).collect();

        info!(domain, service, target = ?target.entity_id, "Invoking action");
        self.client.call_service(domain, service, target, data).await
    }

    /// Translate a hub event for the host
    pub fn translate_event(&self, event: &HassEvent) -> PluginEvent {
        transform_event(event)
    }
}

fn is_selected(ids: Option<&[String]>, id: &str) -> bool {
    ids.map_or(true, |ids| ids.iter().any(|candidate| candidate == id))
}
