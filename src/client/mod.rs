//! Home Assistant records and the transport the plugin talks through
//!
//! The websocket connection itself lives outside this crate. Anything that
//! can fetch states and services and forward a service call implements
//! [`HassClient`].

pub mod snapshot_client;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub use snapshot_client::{ServiceCall, SnapshotClient};

/// One entry of the hub's `get_states` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HassEntity {
    /// Domain-qualified id (`light.kitchen`)
    pub entity_id: String,
    /// Current state, usually a string
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_changed: Option<DateTime<FixedOffset>>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<FixedOffset>>,
}

/// Domain -> service name -> descriptor, as returned by `get_services`
pub type HassServices = IndexMap<String, IndexMap<String, ServiceDescriptor>>;

/// Metadata describing one hub service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Present and truthy when the service accepts a target
    #[serde(default)]
    pub target: Option<Value>,
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,
}

/// Metadata describing one service parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Single-entry map: selector tag -> selector options
    #[serde(default)]
    pub selector: Option<Map<String, Value>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub example: Option<Value>,
}

/// Event pushed by the hub's event subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HassEvent {
    pub event_type: String,
    #[serde(default)]
    pub data: Map<String, Value>,
    /// `LOCAL` or `REMOTE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_fired: Option<DateTime<FixedOffset>>,
}

/// Record timestamps are informational; an unparsable one reads as `None`
fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok()))
}

/// Target payload of a service call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl ServiceTarget {
    pub fn entity(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: Some(entity_id.into()),
        }
    }
}

/// Transport collaborator supplying raw records to the plugin
#[async_trait]
pub trait HassClient: Send + Sync {
    /// All current entity states
    async fn fetch_states(&self) -> Result<Vec<HassEntity>>;

    /// All registered services grouped by domain
    async fn fetch_services(&self) -> Result<HassServices>;

    /// Dispatch a service call to the hub
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        target: ServiceTarget,
        data: Map<String, Value>,
    ) -> Result<()>;
}
