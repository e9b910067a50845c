//! Normalized data model handed to the haus host
//!
//! Every type here is a transient value object: built fresh by one
//! normalization call and serialized by the caller.

pub mod field;
pub mod property;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

pub use field::{Field, FieldKind, SelectOption};
pub use property::{Property, PropertyValue, TableColumn};

/// Plugin name stamped on every entity, action and event
pub const SOURCE: &str = "hass";

/// Presentation metadata for entities, properties, actions and fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayData {
    pub label: String,
    pub sub_label: Option<String>,
    pub icon: String,
}

impl DisplayData {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sub_label: None,
            icon: icon.into(),
        }
    }

    pub fn with_sub_label(mut self, sub_label: Option<String>) -> Self {
        self.sub_label = sub_label;
        self
    }
}

/// A normalized hub entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Domain-qualified id, e.g. `light.kitchen`
    pub id: String,
    pub source: &'static str,
    /// Domain prefix of the id
    #[serde(rename = "type")]
    pub entity_type: String,
    pub display: DisplayData,
    /// Keyed by property id (`<entity id>.<key>`)
    pub properties: IndexMap<String, Property>,
}

/// A normalized hub service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    /// `domain.service`
    pub id: String,
    pub source: &'static str,
    pub display: DisplayData,
    /// Set only when the service accepts a target
    pub target_types: Option<Vec<String>>,
    pub fields: IndexMap<String, Field>,
}

/// A hub event translated for the host's event stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginEvent {
    pub id: String,
    pub plugin: &'static str,
    pub types: Vec<String>,
    pub data: Map<String, Value>,
    pub targets: Vec<String>,
    pub new_state: Option<Entity>,
}
