//! Normalization engine
//!
//! Pure, synchronous transforms from raw hub records to the typed model.
//! Data flows one way: transformers call classifiers, classifiers call the
//! value parsers. Nothing here holds state between calls.

pub mod action_transformer;
pub mod entity_transformer;
pub mod event_transformer;
pub mod field_classifier;
pub mod icon_registry;
pub mod property_classifier;
pub mod value_parsers;

pub use action_transformer::transform_action;
pub use entity_transformer::transform_entity;
pub use event_transformer::transform_event;
pub use field_classifier::{classify_field, FieldShape};
pub use property_classifier::{classify_properties, classify_property, TableBuild};
pub use value_parsers::{infer, InferredValue, NumericValue, Timestamp, ValueKind};
