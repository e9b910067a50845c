//! Value-type inference for raw hub values
//!
//! Home Assistant reports most states as strings (`"on"`, `"21.5"`,
//! `"2024-01-01T00:00:00+00:00"`) while attributes keep their JSON type.
//! [`infer`] turns either into a semantic kind plus the coerced value.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Semantic kind assigned to a raw value
///
/// The first four kinds come from coercing strings. The rest name the JSON
/// type of a value that was not a string and was passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Boolean,
    Number,
    #[serde(rename = "datetime")]
    DateTime,
    String,
    Bool,
    Int,
    Float,
    List,
    Dict,
    None,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::DateTime => "datetime",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::List => "list",
            ValueKind::Dict => "dict",
            ValueKind::None => "none",
        }
    }

    /// Kind of a JSON value that is not coerced
    pub fn of_native(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Int,
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Dict,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer or floating point number
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
}

/// ISO-8601 datetime, with or without a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Wall-clock time as written, ignoring any offset
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Timestamp::Zoned(dt) => dt.naive_local(),
            Timestamp::Naive(dt) => *dt,
        }
    }
}

/// Coerced value produced by [`infer`]
#[derive(Debug, Clone, PartialEq)]
pub enum InferredValue {
    Boolean(bool),
    Number(NumericValue),
    DateTime(Timestamp),
    String(String),
    /// Any non-string input, untouched
    Native(Value),
}

impl InferredValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            InferredValue::Boolean(_) => ValueKind::Boolean,
            InferredValue::Number(_) => ValueKind::Number,
            InferredValue::DateTime(_) => ValueKind::DateTime,
            InferredValue::String(_) => ValueKind::String,
            InferredValue::Native(value) => ValueKind::of_native(value),
        }
    }
}

type StringParser = fn(&str) -> Option<InferredValue>;

/// Coercions tried on string values, first match wins
const STRING_PARSERS: &[StringParser] = &[
    parse_boolean,
    parse_integer,
    parse_float,
    parse_datetime,
];

const FALSE_WORDS: &[&str] = &["off", "false", "no"];
const TRUE_WORDS: &[&str] = &["on", "true", "yes"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ZONED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Infer the semantic kind of a raw value and coerce it.
///
/// Strings are matched against boolean words, then parsed as integer, float
/// and ISO-8601 datetime, falling back to the string itself. Anything else
/// keeps its value and reports its JSON type. Never fails.
pub fn infer(value: &Value) -> (InferredValue, ValueKind) {
    let inferred = match value {
        Value::String(text) => STRING_PARSERS
            .iter()
            .find_map(|parse| parse(text))
            .unwrap_or_else(|| InferredValue::String(text.clone())),
        other => InferredValue::Native(other.clone()),
    };
    let kind = inferred.kind();
    (inferred, kind)
}

fn parse_boolean(text: &str) -> Option<InferredValue> {
    let lowered = text.to_lowercase();
    if FALSE_WORDS.contains(&lowered.as_str()) {
        Some(InferredValue::Boolean(false))
    } else if TRUE_WORDS.contains(&lowered.as_str()) {
        Some(InferredValue::Boolean(true))
    } else {
        None
    }
}

fn parse_integer(text: &str) -> Option<InferredValue> {
    let digits = strip_digit_separators(text.trim())?;
    digits
        .parse::<i64>()
        .ok()
        .map(|i| InferredValue::Number(NumericValue::Integer(i)))
}

fn parse_float(text: &str) -> Option<InferredValue> {
    let digits = strip_digit_separators(text.trim())?;
    digits
        .parse::<f64>()
        .ok()
        .map(|f| InferredValue::Number(NumericValue::Float(f)))
}

fn parse_datetime(text: &str) -> Option<InferredValue> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(InferredValue::DateTime(Timestamp::Zoned(dt)));
    }

    let text = text.strip_suffix('Z').map_or_else(
        || text.to_string(),
        |stripped| format!("{stripped}+00:00"),
    );

    if let Some(dt) = ZONED_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&text, format).ok())
    {
        return Some(InferredValue::DateTime(Timestamp::Zoned(dt)));
    }

    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&text, format).ok())
    {
        return Some(InferredValue::DateTime(Timestamp::Naive(dt)));
    }

    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| InferredValue::DateTime(Timestamp::Naive(dt)))
}

/// Remove single underscores placed between digits (`1_000`).
///
/// Returns `None` for misplaced separators, which no numeric parse accepts.
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    for (i, ch) in chars.iter().enumerate() {
        if *ch == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        output.push(*ch);
    }
    Some(output)
}
