//! End-to-end tests over captured hub snapshots

use haus_hass_plugin::client::{HassEvent, ServiceTarget, SnapshotClient};
use haus_hass_plugin::models::{FieldKind, PropertyValue, SelectOption};
use haus_hass_plugin::{Action, Entity, HassPlugin};
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::{json, Map, Value};
use std::sync::Arc;

mod common;
use common::{fixture_path, snapshot_client};

async fn plugin() -> (HassPlugin, Arc<SnapshotClient>) {
    let client = Arc::new(snapshot_client().await);
    (HassPlugin::new(client.clone()), client)
}

fn find_entity<'a>(entities: &'a [Entity], id: &str) -> &'a Entity {
    entities
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("missing entity {id}"))
}

fn find_action<'a>(actions: &'a [Action], id: &str) -> &'a Action {
    actions
        .iter()
        .find(|a| a.id == id)
        .unwrap_or_else(|| panic!("missing action {id}"))
}

#[tokio::test]
async fn test_entities_from_snapshot() {
    let (plugin, _) = plugin().await;
    let entities = plugin.list_entities(None).await;
    assert_eq!(entities.len(), 5);

    let light = find_entity(&entities, "light.kitchen");
    assert_eq!(light.entity_type, "light");
    assert_eq!(light.display.label, "Kitchen Light");
    assert_eq!(light.display.icon, "bulb");
    assert!(!light.properties.contains_key("light.kitchen.friendly_name"));
    assert_eq!(
        light.properties["light.kitchen.rgb_color"].value,
        PropertyValue::Color {
            value: "rgb(255, 0, 128)".into(),
            has_alpha: false
        }
    );
    assert_eq!(
        light.properties["light.kitchen.state"].value,
        PropertyValue::Boolean { value: true }
    );
    assert_eq!(
        light.properties["light.kitchen.supported_color_modes"].value,
        PropertyValue::List {
            value: vec![json!("hs"), json!("rgb")]
        }
    );

    assert_eq!(
        light.properties["light.kitchen.brightness"].value,
        PropertyValue::String {
            value: "180".into()
        }
    );

    let door = find_entity(&entities, "binary_sensor.front_door");
    assert_eq!(door.display.label, "Binary Sensor.Front Door");
    let keys: Vec<&str> = door.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["binary_sensor.front_door.state"]);

    let sun = find_entity(&entities, "sun.sun");
    assert_eq!(
        sun.properties["sun.sun.next_dawn"].value.type_name(),
        "datetime"
    );
    assert_eq!(
        sun.properties["sun.sun.rising"].value,
        PropertyValue::Boolean { value: true }
    );
}

#[tokio::test]
async fn test_weather_forecast_becomes_table() {
    let (plugin, _) = plugin().await;
    let ids = vec!["weather.home".to_string()];
    let entities = plugin.list_entities(Some(&ids)).await;
    assert_eq!(entities.len(), 1);

    let json = serde_json::to_value(&entities[0].properties["weather.home.forecast"]).unwrap();
    assert_eq!(json["type"], json!("table"));
    assert_eq!(
        json["columns"],
        json!([
            {"key": "temp", "value_type": "number"},
            {"key": "day", "value_type": "string"}
        ])
    );
    assert_eq!(json["value"][1], json!({"temp": 18, "day": "Tue"}));
}

#[tokio::test]
async fn test_normalization_is_idempotent() {
    let (plugin, _) = plugin().await;
    let first = serde_json::to_value(plugin.list_entities(None).await).unwrap();
    let second = serde_json::to_value(plugin.list_entities(None).await).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_actions_from_snapshot() {
    let (plugin, _) = plugin().await;
    let actions = plugin.list_actions(None).await;
    let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "light.turn_on",
            "homeassistant.restart",
            "calendar.create_event",
            "conversation.process",
            "media_player.join",
        ]
    );

    let turn_on = find_action(&actions, "light.turn_on");
    assert_eq!(turn_on.display.label, "Turn on");
    assert_eq!(turn_on.target_types, Some(vec!["light".to_string()]));

    assert_eq!(turn_on.fields["rgb_color"].kind, FieldKind::Color);
    assert_eq!(turn_on.fields["effect"].kind, FieldKind::String);
    assert_eq!(turn_on.fields["transition"].display.label, "Transition");
    assert_eq!(
        turn_on.fields["transition"].kind,
        FieldKind::Number {
            min: Some(0.0),
            max: Some(300.0),
            decimals: false,
            unit: Some("seconds".into()),
        }
    );
    assert_eq!(turn_on.fields["brightness_pct"].display.label, "Brightness");
    assert!(turn_on.fields["color_temp"].advanced);
    assert_eq!(
        turn_on.fields["flash"].kind,
        FieldKind::Select {
            options: vec![
                SelectOption {
                    value: "long".into(),
                    label: "Long".into()
                },
                SelectOption {
                    value: "short".into(),
                    label: "Short".into()
                },
            ],
            multi: false,
        }
    );

    let restart = find_action(&actions, "homeassistant.restart");
    assert_eq!(restart.target_types, None);
    assert!(restart.fields.is_empty());
}

#[rstest]
#[case("summary", Some(FieldKind::String))]
#[case("date", Some(FieldKind::Date))]
#[case("datetime", Some(FieldKind::DateTime))]
#[case("in", Some(FieldKind::Json))]
#[case("fixed_value", None)]
#[tokio::test]
async fn test_calendar_fields(#[case] key: &str, #[case] expected: Option<FieldKind>) {
    let (plugin, _) = plugin().await;
    let ids = vec!["calendar.create_event".to_string()];
    let actions = plugin.list_actions(Some(&ids)).await;
    let create = &actions[0];

    assert_eq!(create.display.label, "Create Event");
    assert_eq!(create.fields.get(key).map(|f| f.kind.clone()), expected);
}

#[tokio::test]
async fn test_entity_field_prefixes() {
    let (plugin, _) = plugin().await;
    let actions = plugin.list_actions(None).await;

    let join = find_action(&actions, "media_player.join");
    assert_eq!(
        join.fields["group_members"].kind,
        FieldKind::Entity {
            prefix: vec!["media_player".into()]
        }
    );
    assert!(join.fields["group_members"].required);

    let process = find_action(&actions, "conversation.process");
    assert_eq!(
        process.fields["agent_id"].kind,
        FieldKind::Entity {
            prefix: vec!["conversation_agent".into()]
        }
    );
    assert_eq!(process.fields["language"].kind, FieldKind::String);
}

#[tokio::test]
async fn test_invoke_action_is_recorded() {
    let (plugin, client) = plugin().await;

    let mut fields = Map::new();
    fields.insert("brightness_pct".into(), json!(40));
    fields.insert("effect".into(), Value::Null);
    plugin
        .invoke_action("light.turn_on", Some("light.kitchen"), fields)
        .await
        .unwrap();

    let calls = client.recorded_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].domain, "light");
    assert_eq!(calls[0].service, "turn_on");
    assert_eq!(calls[0].target, ServiceTarget::entity("light.kitchen"));
    assert_eq!(
        Value::Object(calls[0].data.clone()),
        json!({"brightness_pct": 40})
    );
}

#[tokio::test]
async fn test_state_changed_event() {
    let (plugin, _) = plugin().await;
    let event: HassEvent = serde_json::from_value(json!({
        "event_type": "state_changed",
        "data": {
            "entity_id": "light.kitchen",
            "new_state": {
                "entity_id": "light.kitchen",
                "state": "off",
                "attributes": {"friendly_name": "Kitchen Light"}
            }
        }
    }))
    .unwrap();

    let translated = plugin.translate_event(&event);
    assert_eq!(translated.plugin, "hass");
    assert_eq!(translated.types, vec!["state_changed".to_string()]);
    assert_eq!(translated.targets, vec!["light.kitchen".to_string()]);

    let new_state = translated.new_state.expect("normalized new state");
    assert_eq!(new_state.display.label, "Kitchen Light");
    assert_eq!(
        new_state.properties["light.kitchen.state"].value,
        PropertyValue::Boolean { value: false }
    );
}

#[tokio::test]
async fn test_missing_snapshot_file_is_config_error() {
    let result = SnapshotClient::from_files(Some(&fixture_path("absent.json")), None).await;
    assert!(matches!(
        result,
        Err(haus_hass_plugin::HassError::Config(_))
    ));
}
