//! Typed action fields

use serde::Serialize;
use serde_json::Value;

use super::DisplayData;

/// One displayable parameter of an action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub display: DisplayData,
    pub advanced: bool,
    pub default: Option<Value>,
    pub required: bool,
    pub example: Option<Value>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Variant-typed field shape, serialized with a `type` tag
///
/// Selector constraints are carried as metadata; values are never validated
/// against them here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Select {
        options: Vec<SelectOption>,
        multi: bool,
    },
    Time,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "object")]
    Json,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        /// Whether the selector declares a step
        decimals: bool,
        unit: Option<String>,
    },
    Boolean,
    Entity {
        /// Entity id prefixes the field accepts, e.g. `light`
        prefix: Vec<String>,
    },
    Color,
}

impl FieldKind {
    /// Default icon for fields of this kind
    pub fn icon(&self) -> &'static str {
        match self {
            FieldKind::String => "cursor-text",
            FieldKind::Select { .. } => "select",
            FieldKind::Time => "clock",
            FieldKind::Date => "calendar",
            FieldKind::DateTime => "calendar-clock",
            FieldKind::Json => "braces",
            FieldKind::Number { .. } => "number",
            FieldKind::Boolean => "toggle-left",
            FieldKind::Entity { .. } => "hexagon",
            FieldKind::Color => "palette",
        }
    }
}

/// Choice offered by a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}
