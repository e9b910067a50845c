//! Normalization engine tests
//!
//! Exercises the value parsers, property classifier and field classifier
//! through their public API with hub-shaped records.

use haus_hass_plugin::client::FieldDescriptor;
use haus_hass_plugin::models::{FieldKind, PropertyValue, TableColumn};
use haus_hass_plugin::services::property_classifier::{classify_properties, DENIED_KEYS};
use haus_hass_plugin::services::{
    classify_field, infer, transform_entity, InferredValue, NumericValue, ValueKind,
};
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::{json, Map, Value};

mod common;
use common::entity;

#[rstest]
#[case("true")]
#[case("TRUE")]
#[case("yes")]
#[case("on")]
fn test_truthy_words(#[case] word: &str) {
    assert_eq!(
        infer(&json!(word)),
        (InferredValue::Boolean(true), ValueKind::Boolean)
    );
}

#[rstest]
#[case("false")]
#[case("off")]
#[case("no")]
fn test_falsy_words(#[case] word: &str) {
    assert_eq!(
        infer(&json!(word)),
        (InferredValue::Boolean(false), ValueKind::Boolean)
    );
}

#[rstest]
#[case(json!("42"), ValueKind::Number)]
#[case(json!("-0.5"), ValueKind::Number)]
#[case(json!("2024-01-01T00:00:00"), ValueKind::DateTime)]
#[case(json!("2024-01-01T00:00:00+02:00"), ValueKind::DateTime)]
#[case(json!("hello"), ValueKind::String)]
#[case(json!("unknown"), ValueKind::String)]
#[case(json!(12), ValueKind::Int)]
#[case(json!(1.5), ValueKind::Float)]
#[case(json!(false), ValueKind::Bool)]
#[case(json!(["a"]), ValueKind::List)]
#[case(json!({"a": 1}), ValueKind::Dict)]
fn test_inferred_kinds(#[case] value: Value, #[case] expected: ValueKind) {
    assert_eq!(infer(&value).1, expected);
}

#[test]
fn test_integer_strings_are_not_floats() {
    assert_eq!(
        infer(&json!("42")).0,
        InferredValue::Number(NumericValue::Integer(42))
    );
}

#[test]
fn test_denied_keys_never_surface() {
    let mut record = Map::new();
    record.insert("state".into(), json!("on"));
    for key in DENIED_KEYS {
        record.insert(key.to_string(), json!("x"));
        record.insert(key.to_uppercase(), json!("y"));
    }

    let properties = classify_properties("light.x", &record);
    assert_eq!(properties.len(), 1);
    for id in properties.keys() {
        let suffix = id.trim_start_matches("light.x.");
        assert!(!DENIED_KEYS.contains(&suffix.to_lowercase().as_str()));
    }
}

#[test]
fn test_light_record() {
    let normalized = transform_entity(&entity(json!({
        "entity_id": "light.x",
        "state": "on",
        "attributes": {"rgb_color": [255, 0, 128], "brightness": 180}
    })));

    assert_eq!(
        normalized.properties["light.x.rgb_color"].value,
        PropertyValue::Color {
            value: "rgb(255, 0, 128)".into(),
            has_alpha: false
        }
    );
    assert_eq!(
        normalized.properties["light.x.state"].value,
        PropertyValue::Boolean { value: true }
    );
}

#[test]
fn test_forecast_table() {
    let normalized = transform_entity(&entity(json!({
        "entity_id": "weather.home",
        "state": "sunny",
        "attributes": {
            "forecast": [{"temp": 20, "day": "Mon"}, {"temp": 18, "day": "Tue"}],
            "schedule": []
        }
    })));

    match &normalized.properties["weather.home.forecast"].value {
        PropertyValue::Table { columns, value } => {
            assert_eq!(value.len(), 2);
            assert_eq!(
                columns,
                &vec![
                    TableColumn {
                        key: "temp".into(),
                        value_type: ValueKind::Number
                    },
                    TableColumn {
                        key: "day".into(),
                        value_type: ValueKind::String
                    },
                ]
            );
        }
        other => panic!("expected table, got {other:?}"),
    }

    assert_eq!(
        normalized.properties["weather.home.schedule"].value,
        PropertyValue::List { value: vec![] }
    );
}

#[rstest]
#[case("text", "message", FieldKind::String)]
#[case("text", "date", FieldKind::Date)]
#[case("text", "datetime", FieldKind::DateTime)]
#[case("object", "rgb_color", FieldKind::Color)]
#[case("object", "data", FieldKind::Json)]
#[case("time", "at", FieldKind::Time)]
#[case("boolean", "enabled", FieldKind::Boolean)]
#[case("color_rgb", "color", FieldKind::Color)]
#[case("area", "area_id", FieldKind::String)]
fn test_selector_dispatch(#[case] tag: &str, #[case] key: &str, #[case] expected: FieldKind) {
    let descriptor: FieldDescriptor =
        serde_json::from_value(json!({"selector": {tag: {}}})).unwrap();
    let field = classify_field(key, &descriptor).expect("field");
    assert_eq!(field.kind, expected);
}

#[test]
fn test_number_selector_with_step() {
    let descriptor: FieldDescriptor =
        serde_json::from_value(json!({"selector": {"number": {"min": 0, "max": 100, "step": 1}}}))
            .unwrap();

    match classify_field("level", &descriptor).map(|f| f.kind) {
        Some(FieldKind::Number {
            min, max, decimals, ..
        }) => {
            assert_eq!(min, Some(0.0));
            assert_eq!(max, Some(100.0));
            assert!(decimals);
        }
        other => panic!("expected number field, got {other:?}"),
    }
}

#[test]
fn test_constant_selector_is_dropped() {
    let descriptor: FieldDescriptor =
        serde_json::from_value(json!({"selector": {"constant": {"value": true}}})).unwrap();
    assert!(classify_field("fixed", &descriptor).is_none());
}

#[test]
fn test_serialized_shapes() {
    let normalized = transform_entity(&entity(json!({
        "entity_id": "light.x",
        "state": "21",
        "attributes": {"rgb_color": [1, 2, 3]}
    })));

    let value = serde_json::to_value(&normalized).unwrap();
    assert_eq!(value["type"], json!("light"));
    assert_eq!(value["source"], json!("hass"));
    assert_eq!(
        value["properties"]["light.x.state"],
        json!({
            "id": "light.x.state",
            "display": {"label": "State", "sub_label": null, "icon": "number"},
            "type": "number",
            "value": 21
        })
    );
    assert_eq!(
        value["properties"]["light.x.rgb_color"]["type"],
        json!("color")
    );
}
