//! Entity normalization
//!
//! Turns one raw [`HassEntity`] into an [`Entity`] with identity, display
//! metadata and a freshly classified property map.

use serde_json::{Map, Value};
use tracing::debug;

use crate::client::HassEntity;
use crate::models::{DisplayData, Entity, SOURCE};
use crate::services::icon_registry::entity_icon;
use crate::services::property_classifier::classify_properties;
use crate::utils::title_case;

/// Domain prefix of an entity id (`light` for `light.kitchen`)
pub fn entity_domain(entity_id: &str) -> &str {
    entity_id
        .split_once('.')
        .map_or(entity_id, |(domain, _)| domain)
}

/// `{state: <state>}` followed by the attributes.
///
/// An attribute literally named `state` replaces the real state value.
pub fn merged_record(entity: &HassEntity) -> Map<String, Value> {
    let mut record = Map::with_capacity(entity.attributes.len() + 1);
    record.insert("state".to_string(), entity.state.clone());
    for (key, value) in &entity.attributes {
        record.insert(key.clone(), value.clone());
    }
    record
}

/// Normalize one entity record
pub fn transform_entity(entity: &HassEntity) -> Entity {
    let entity_type = entity_domain(&entity.entity_id).to_string();

    let label = entity
        .attributes
        .get("friendly_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| title_case(&entity.entity_id.replace('_', " ")));

    let properties = classify_properties(&entity.entity_id, &merged_record(entity));
    debug!(
        entity_id = %entity.entity_id,
        properties = properties.len(),
        "Normalized entity"
    );

    Entity {
        id: entity.entity_id.clone(),
        source: SOURCE,
        display: DisplayData::new(label, entity_icon(&entity_type)),
        entity_type,
        properties,
    }
}
