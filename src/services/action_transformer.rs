//! Action normalization for hub services

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::client::ServiceDescriptor;
use crate::models::{Action, DisplayData, Field, SOURCE};
use crate::services::field_classifier::classify_field;
use crate::services::icon_registry::action_icon;
use crate::utils::capitalize_words;

/// Normalize one `domain.service` descriptor into an [`Action`]
pub fn transform_action(domain: &str, service: &str, descriptor: &ServiceDescriptor) -> Action {
    let id = format!("{domain}.{service}");

    let label = descriptor
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| capitalize_words(&service.replace('_', " ")));
    let sub_label = descriptor
        .description
        .clone()
        .filter(|description| !description.is_empty());

    let target_types = descriptor
        .target
        .as_ref()
        .filter(|target| is_truthy(target))
        .map(|_| vec![domain.to_string()]);

    let fields: IndexMap<String, Field> = descriptor
        .fields
        .iter()
        .filter_map(|(key, field)| classify_field(key, field).map(|f| (key.clone(), f)))
        .collect();

    debug!(
        action_id = %id,
        fields = fields.len(),
        dropped = descriptor.fields.len() - fields.len(),
        "Normalized action"
    );

    Action {
        display: DisplayData::new(label, action_icon(&id, domain)).with_sub_label(sub_label),
        id,
        source: SOURCE,
        target_types,
        fields,
    }
}

/// JSON truthiness: null, false, zero and empty strings/collections are false
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
