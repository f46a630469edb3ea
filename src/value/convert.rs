//! Conversion between `Value` and JSON
//!
//! Accepts relaxed Extended JSON wrappers:
//! - `{"$oid": "<24 hex>"}`
//! - `{"$date": <millis> | "<RFC 3339>"}`
//! - `{"$binary": "<base64>"}`
//! - `{"$regex": "<pattern>", "$options": "<flags>"}`
//! - `{"$numberLong": "<digits>"}`
//! - `{"$numberDouble": "NaN" | "Infinity" | "-Infinity" | "<decimal>"}`
//!
//! Dates are written as RFC 3339 with as many fractional digits as the
//! instant needs, so sub-millisecond precision survives a round trip.
//!
//! Plain JSON numbers become Int32 when they fit, else Int64, else Double.
//! Arrays become index-keyed documents.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value as Json};

use super::errors::{ConversionError, ConversionResult};
use super::{Document, ObjectId, RegularExpression, Value};

impl Value {
    /// Builds a value from JSON
    pub fn from_json(json: &Json) -> ConversionResult<Self> {
        match json {
            Json::Null => Ok(Value::Null),
            Json::Bool(b) => Ok(Value::Boolean(*b)),
            Json::Number(n) => Ok(number_to_value(n)),
            Json::String(s) => Ok(Value::String(s.clone())),
            Json::Array(items) => {
                let values = items
                    .iter()
                    .map(Value::from_json)
                    .collect::<ConversionResult<Vec<_>>>()?;
                Ok(Value::Document(Document::from_array(values)))
            }
            Json::Object(map) => match extended_json(map)? {
                Some(value) => Ok(value),
                None => Ok(Value::Document(Document::from_json_map(map)?)),
            },
        }
    }

    /// Renders the value as JSON.
    ///
    /// Missing has no JSON form: it is dropped inside documents and renders
    /// as null at the top level.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Missing | Value::Null => Json::Null,
            Value::Int32(v) => Json::from(*v),
            Value::Int64(v) => single("$numberLong", Json::String(v.to_string())),
            Value::Double(v) => match Number::from_f64(*v) {
                Some(n) => Json::Number(n),
                None => single("$numberDouble", Json::String(non_finite_name(*v).to_string())),
            },
            Value::String(s) => Json::String(s.clone()),
            Value::Document(doc) => doc.to_json(),
            Value::Binary(bytes) => single("$binary", Json::String(STANDARD.encode(bytes))),
            Value::ObjectId(id) => single("$oid", Json::String(id.to_hex())),
            Value::Boolean(b) => Json::Bool(*b),
            Value::DateTime(dt) => single(
                "$date",
                Json::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            ),
            Value::RegularExpression(re) => {
                let mut map = Map::new();
                map.insert("$regex".to_string(), Json::String(re.pattern().to_string()));
                map.insert("$options".to_string(), Json::String(re.options().to_string()));
                Json::Object(map)
            }
        }
    }
}

impl Document {
    /// Builds a document from a JSON object, keeping key order
    pub fn from_json_map(map: &Map<String, Json>) -> ConversionResult<Self> {
        let mut doc = Document::new();
        for (key, json) in map {
            doc.insert(key.clone(), Value::from_json(json)?);
        }
        Ok(doc)
    }

    /// Renders the document as a JSON object, dropping Missing fields
    pub fn to_json(&self) -> Json {
        let map: Map<String, Json> = self
            .iter()
            .filter(|(_, v)| !v.is_missing())
            .map(|(k, v)| (k.to_string(), v.to_json()))
            .collect();
        Json::Object(map)
    }
}

fn single(key: &str, value: Json) -> Json {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Json::Object(map)
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        match i32::try_from(i) {
            Ok(small) => Value::Int32(small),
            Err(_) => Value::Int64(i),
        }
    } else if let Some(f) = n.as_f64() {
        Value::Double(f)
    } else {
        // u64 beyond i64::MAX
        Value::Double(n.as_u64().map(|u| u as f64).unwrap_or(f64::NAN))
    }
}

/// Recognizes an Extended JSON wrapper, returning None for plain objects
fn extended_json(map: &Map<String, Json>) -> ConversionResult<Option<Value>> {
    if let Some(Json::String(pattern)) = map.get("$regex") {
        let options = match map.get("$options") {
            None if map.len() == 1 => Some(""),
            Some(Json::String(options)) if map.len() == 2 => Some(options.as_str()),
            Some(other) if map.len() == 2 => {
                return Err(ConversionError::InvalidRegex(format!(
                    "$options must be a string, got {}",
                    other
                )))
            }
            _ => None,
        };
        if let Some(options) = options {
            return Ok(Some(Value::RegularExpression(RegularExpression::new(
                pattern.clone(),
                options,
            ))));
        }
        return Ok(None);
    }

    if map.len() != 1 {
        return Ok(None);
    }

    let (key, inner) = match map.iter().next() {
        Some(entry) => entry,
        None => return Ok(None),
    };

    let value = match (key.as_str(), inner) {
        ("$oid", Json::String(hex)) => Value::ObjectId(ObjectId::parse_str(hex)?),
        ("$date", json) => Value::DateTime(parse_date(json)?),
        ("$binary", Json::String(encoded)) => Value::Binary(
            STANDARD
                .decode(encoded)
                .map_err(|e| ConversionError::InvalidBinary(e.to_string()))?,
        ),
        ("$numberLong", Json::String(digits)) => Value::Int64(
            digits
                .parse::<i64>()
                .map_err(|_| ConversionError::InvalidNumberLong(digits.clone()))?,
        ),
        ("$numberDouble", Json::String(text)) => Value::Double(parse_double(text)?),
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn non_finite_name(v: f64) -> &'static str {
    if v.is_nan() {
        "NaN"
    } else if v.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn parse_double(text: &str) -> ConversionResult<f64> {
    match text {
        "NaN" => Ok(f64::NAN),
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => text
            .parse::<f64>()
            .map_err(|_| ConversionError::InvalidNumberDouble(text.to_string())),
    }
}

fn parse_date(json: &Json) -> ConversionResult<DateTime<Utc>> {
    match json {
        Json::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or_else(|| ConversionError::InvalidDate(n.to_string())),
        Json::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ConversionError::InvalidDate(format!("{}: {}", s, e))),
        Json::Object(inner) => match inner.get("$numberLong") {
            Some(Json::String(digits)) => digits
                .parse::<i64>()
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .ok_or_else(|| ConversionError::InvalidDate(digits.clone())),
            _ => Err(ConversionError::InvalidDate(json.to_string())),
        },
        other => Err(ConversionError::InvalidDate(other.to_string())),
    }
}
