//! Translation of hub events for the host's event stream

use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use crate::client::{HassEntity, HassEvent};
use crate::models::{PluginEvent, SOURCE};
use crate::services::entity_transformer::transform_entity;

/// Translate one hub event.
///
/// `targets` holds the event's `entity_id` (string or list). `new_state` is
/// normalized when the event carries a well-formed state object; state
/// removals (`new_state: null`) yield `None`.
pub fn transform_event(event: &HassEvent) -> PluginEvent {
    let targets = match event.data.get("entity_id") {
        Some(Value::String(id)) => vec![id.clone()],
        Some(Value::Array(ids)) => ids
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let new_state = event
        .data
        .get("new_state")
        .filter(|state| state.is_object())
        .and_then(|state| serde_json::from_value::<HassEntity>(state.clone()).ok())
        .map(|entity| transform_entity(&entity));

    trace!(
        event_type = %event.event_type,
        targets = targets.len(),
        has_state = new_state.is_some(),
        "Translated event"
    );

    PluginEvent {
        id: Uuid::new_v4().simple().to_string(),
        plugin: SOURCE,
        types: vec![event.event_type.clone()],
        data: event.data.clone(),
        targets,
        new_state,
    }
}
