//! Classification of entity state and attributes into typed properties
//!
//! Each key of the merged `{state} ∪ attributes` record becomes one
//! [`Property`]. Values run through [`infer`] first; lists then go through
//! the empty / colour / table / plain-list heuristics below.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::models::{DisplayData, Property, PropertyValue, TableColumn};
use crate::services::value_parsers::{infer, InferredValue, ValueKind};
use crate::utils::humanize_key;

/// Identity and presentation attributes that never become properties
pub const DENIED_KEYS: &[&str] = &[
    "assumed_state",
    "attribution",
    "entity_picture",
    "device_class",
    "has_entity_name",
    "should_poll",
    "icon",
    "friendly_name",
    "translation_key",
];

/// Case-insensitive denylist check
pub fn is_denied_key(key: &str) -> bool {
    let lowered = key.to_lowercase();
    DENIED_KEYS.contains(&lowered.as_str())
}

/// Outcome of building a table property from a list of records
#[derive(Debug, Clone, PartialEq)]
pub enum TableBuild {
    Table {
        rows: Vec<Map<String, Value>>,
        columns: Vec<TableColumn>,
    },
    /// Some row was not a record; the list is kept as-is
    Fallback(Vec<Value>),
}

/// Classify every non-denied key of a record.
///
/// Output follows the record's iteration order.
pub fn classify_properties(
    entity_id: &str,
    record: &Map<String, Value>,
) -> IndexMap<String, Property> {
    record
        .iter()
        .filter(|(key, _)| !is_denied_key(key))
        .map(|(key, value)| {
            let property = classify_property(entity_id, key, value);
            (property.id.clone(), property)
        })
        .collect()
}

/// Classify a single key/value pair of an entity
pub fn classify_property(entity_id: &str, key: &str, value: &Value) -> Property {
    let id = format!("{entity_id}.{key}");
    let (inferred, kind) = infer(value);
    trace!(property_id = %id, %kind, "Classifying property");

    let value = match inferred {
        InferredValue::Boolean(b) | InferredValue::Native(Value::Bool(b)) => {
            PropertyValue::Boolean { value: b }
        }
        InferredValue::Number(n) => PropertyValue::Number { value: n },
        InferredValue::DateTime(ts) => PropertyValue::DateTime { value: ts },
        InferredValue::String(s) => PropertyValue::String { value: s },
        InferredValue::Native(Value::Array(items)) => classify_list(&id, items),
        // Native numbers, objects and null keep their JSON text
        InferredValue::Native(other) => PropertyValue::String {
            value: stringify(&other),
        },
    };

    Property {
        display: DisplayData::new(humanize_key(key), value.icon()),
        id,
        value,
    }
}

fn classify_list(property_id: &str, items: Vec<Value>) -> PropertyValue {
    if items.is_empty() {
        return PropertyValue::List { value: items };
    }

    if let Some(color) = rgb_color(property_id, &items) {
        return PropertyValue::Color {
            value: color,
            has_alpha: false,
        };
    }

    if items[0].is_object() {
        match build_table(items) {
            TableBuild::Table { rows, columns } => {
                return PropertyValue::Table {
                    value: rows,
                    columns,
                }
            }
            TableBuild::Fallback(items) => {
                debug!(property_id, "Rows are not all records, keeping list");
                return PropertyValue::List { value: items };
            }
        }
    }

    PropertyValue::List { value: items }
}

/// Format `[r, g, b]` as `rgb(r, g, b)` for ids mentioning rgb
fn rgb_color(property_id: &str, items: &[Value]) -> Option<String> {
    if !property_id.contains("rgb") || items.len() != 3 {
        return None;
    }

    let channels = items
        .iter()
        .map(|item| match item {
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    Some(format!("rgb({})", channels.join(", ")))
}

/// Build a table whose columns come from the first row's keys, each typed by
/// the inferred kind of that row's value.
pub fn build_table(items: Vec<Value>) -> TableBuild {
    if !items.iter().all(Value::is_object) {
        return TableBuild::Fallback(items);
    }

    let rows: Vec<Map<String, Value>> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(row) => Some(row),
            _ => None,
        })
        .collect();

    let columns = rows
        .first()
        .map(|first| {
            first
                .iter()
                .map(|(key, value)| TableColumn {
                    key: key.clone(),
                    value_type: column_kind(value),
                })
                .collect()
        })
        .unwrap_or_default();

    TableBuild::Table { rows, columns }
}

/// Column kinds report JSON booleans and numbers by their semantic kind
fn column_kind(value: &Value) -> ValueKind {
    match infer(value).1 {
        ValueKind::Bool => ValueKind::Boolean,
        ValueKind::Int | ValueKind::Float => ValueKind::Number,
        other => other,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
