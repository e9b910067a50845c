//! Typed entity properties

use serde::Serialize;
use serde_json::{Map, Value};

use super::DisplayData;
use crate::services::value_parsers::{NumericValue, Timestamp, ValueKind};

/// One displayable attribute of an entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// `<entity id>.<key>`
    pub id: String,
    pub display: DisplayData,
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// Variant-typed property payload, serialized with a `type` tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Boolean {
        value: bool,
    },
    Number {
        value: NumericValue,
    },
    #[serde(rename = "datetime")]
    DateTime {
        value: Timestamp,
    },
    String {
        value: String,
    },
    List {
        value: Vec<Value>,
    },
    Table {
        value: Vec<Map<String, Value>>,
        columns: Vec<TableColumn>,
    },
    Color {
        /// `rgb(r, g, b)`
        value: String,
        has_alpha: bool,
    },
}

impl PropertyValue {
    /// Icon shown next to a property of this variant
    pub fn icon(&self) -> &'static str {
        match self {
            PropertyValue::Boolean { .. } => "toggle-right",
            PropertyValue::Number { .. } => "number",
            PropertyValue::DateTime { .. } => "calendar-time",
            PropertyValue::String { .. } => "text-size",
            PropertyValue::List { .. } => "list",
            PropertyValue::Table { .. } => "table",
            PropertyValue::Color { .. } => "palette",
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Boolean { .. } => "boolean",
            PropertyValue::Number { .. } => "number",
            PropertyValue::DateTime { .. } => "datetime",
            PropertyValue::String { .. } => "string",
            PropertyValue::List { .. } => "list",
            PropertyValue::Table { .. } => "table",
            PropertyValue::Color { .. } => "color",
        }
    }
}

/// Column of a table property, typed from the first row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub key: String,
    pub value_type: ValueKind,
}
