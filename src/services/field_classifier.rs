//! Classification of service parameter selectors into typed fields
//!
//! A descriptor's selector is a single-entry map such as
//! `{"number": {"min": 0, "max": 100}}`. The tag picks a builder from
//! [`SELECTOR_BUILDERS`]; a few key/tag pairs in [`KEY_OVERRIDES`] are checked
//! first and win over the generic table. Unknown tags become text fields.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::client::FieldDescriptor;
use crate::models::{DisplayData, Field, FieldKind, SelectOption};
use crate::utils::capitalize_words;

/// What a selector classifies to
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    Field {
        kind: FieldKind,
        icon: &'static str,
    },
    /// Fixed value the user never edits; produces no field
    Constant,
}

impl FieldShape {
    fn of(kind: FieldKind) -> Self {
        let icon = kind.icon();
        FieldShape::Field { kind, icon }
    }
}

type FieldBuilder = fn(&Map<String, Value>) -> FieldShape;

/// Selector tag -> builder
pub const SELECTOR_BUILDERS: &[(&str, FieldBuilder)] = &[
    ("text", text_field),
    ("select", select_field),
    ("time", time_field),
    ("object", object_field),
    ("number", number_field),
    ("boolean", boolean_field),
    ("entity", entity_field),
    ("conversation_agent", conversation_agent_field),
    ("color_temp", color_temp_field),
    ("color_rgb", color_field),
    ("constant", constant_field),
];

/// (field key, selector tag) -> builder, checked before [`SELECTOR_BUILDERS`]
pub const KEY_OVERRIDES: &[(&str, &str, FieldBuilder)] = &[
    ("date", "text", date_field),
    ("datetime", "text", datetime_field),
    ("rgb_color", "object", color_field),
];

/// Classify one service parameter.
///
/// Returns `None` for constant selectors.
pub fn classify_field(key: &str, descriptor: &FieldDescriptor) -> Option<Field> {
    let empty = Map::new();
    let (selector_type, selector_data) = match descriptor
        .selector
        .as_ref()
        .and_then(|selector| selector.iter().next())
    {
        Some((tag, data)) => (tag.as_str(), data.as_object().unwrap_or(&empty)),
        None => ("", &empty),
    };

    let (kind, icon) = match select_shape(key, selector_type, selector_data) {
        FieldShape::Field { kind, icon } => (kind, icon),
        FieldShape::Constant => {
            trace!(key, "Dropping constant field");
            return None;
        }
    };

    Some(Field {
        key: key.to_string(),
        display: DisplayData::new(field_label(key, descriptor), icon)
            .with_sub_label(descriptor.description.clone().filter(|d| !d.is_empty())),
        advanced: descriptor.advanced,
        default: descriptor.default.clone(),
        required: descriptor.required,
        example: descriptor.example.clone(),
        kind,
    })
}

/// Pick the shape for a selector, overrides first
pub fn select_shape(
    key: &str,
    selector_type: &str,
    selector_data: &Map<String, Value>,
) -> FieldShape {
    if let Some((_, _, build)) = KEY_OVERRIDES
        .iter()
        .find(|(k, tag, _)| *k == key && *tag == selector_type)
    {
        return build(selector_data);
    }

    match SELECTOR_BUILDERS
        .iter()
        .find(|(tag, _)| *tag == selector_type)
    {
        Some((_, build)) => build(selector_data),
        None => {
            debug!(key, selector_type, "Unrecognized selector, using text field");
            text_field(selector_data)
        }
    }
}

fn field_label(key: &str, descriptor: &FieldDescriptor) -> String {
    descriptor
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| capitalize_words(&key.replace('_', " ")))
}

fn text_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::String)
}

fn date_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Date)
}

fn datetime_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::DateTime)
}

fn time_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Time)
}

fn object_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Json)
}

fn boolean_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Boolean)
}

fn color_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Color)
}

fn constant_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::Constant
}

fn select_field(data: &Map<String, Value>) -> FieldShape {
    let options = data
        .get("options")
        .and_then(Value::as_array)
        .map(|options| options.iter().filter_map(select_option).collect())
        .unwrap_or_default();

    FieldShape::of(FieldKind::Select {
        options,
        multi: false,
    })
}

/// A plain value or a `{value, label}` pair
fn select_option(option: &Value) -> Option<SelectOption> {
    match option {
        Value::Object(pair) => {
            let value = scalar_text(pair.get("value")?)?;
            let label = pair
                .get("label")
                .and_then(scalar_text)
                .unwrap_or_else(|| option_label(&value));
            Some(SelectOption { value, label })
        }
        other => {
            let value = scalar_text(other)?;
            Some(SelectOption {
                label: option_label(&value),
                value,
            })
        }
    }
}

fn option_label(value: &str) -> String {
    capitalize_words(&value.replace('_', " "))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_field(data: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Number {
        min: data.get("min").and_then(Value::as_f64),
        max: data.get("max").and_then(Value::as_f64),
        decimals: data.contains_key("step"),
        unit: data
            .get("unit_of_measurement")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn color_temp_field(data: &Map<String, Value>) -> FieldShape {
    FieldShape::Field {
        kind: FieldKind::Number {
            min: data.get("min_mireds").and_then(Value::as_f64),
            max: data.get("max_mireds").and_then(Value::as_f64),
            decimals: false,
            unit: None,
        },
        icon: "color-swatch",
    }
}

fn entity_field(data: &Map<String, Value>) -> FieldShape {
    FieldShape::of(FieldKind::Entity {
        prefix: entity_prefixes(data),
    })
}

fn conversation_agent_field(_: &Map<String, Value>) -> FieldShape {
    FieldShape::Field {
        kind: FieldKind::Entity {
            prefix: vec!["conversation_agent".to_string()],
        },
        icon: "message-chatbot",
    }
}

/// `domain.service` prefixes accepted by an entity selector.
///
/// `domain` may be a single string or a list, and may also come from the
/// selector's `filter` entries. Each prefix is `domain.` + `service.` with the
/// trailing dot removed; empty prefixes are dropped.
fn entity_prefixes(data: &Map<String, Value>) -> Vec<String> {
    let mut domains = string_list(data.get("domain"));
    if domains.is_empty() {
        domains = data
            .get("filter")
            .and_then(Value::as_array)
            .map(|filters| {
                filters
                    .iter()
                    .flat_map(|filter| string_list(filter.get("domain")))
                    .collect()
            })
            .unwrap_or_default();
    }
    let service = data.get("service").and_then(Value::as_str);

    let build = |domain: Option<&str>| {
        let mut prefix = String::new();
        if let Some(domain) = domain {
            prefix.push_str(domain);
            prefix.push('.');
        }
        if let Some(service) = service {
            prefix.push_str(service);
            prefix.push('.');
        }
        prefix.trim_end_matches('.').to_string()
    };

    let prefixes: Vec<String> = if domains.is_empty() {
        vec![build(None)]
    } else {
        domains.iter().map(|d| build(Some(d))).collect()
    };

    prefixes.into_iter().filter(|p| !p.is_empty()).collect()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
