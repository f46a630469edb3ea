//! Document field values
//!
//! Defines the closed set of values a document field can hold:
//! - Missing / Null
//! - Numbers (Int32, Int64, Double)
//! - String
//! - Document (ordered, nested)
//! - Binary
//! - ObjectId
//! - Boolean
//! - DateTime
//! - RegularExpression
//!
//! # Missing vs Null
//!
//! `Missing` means "no such field", `Null` means "field present with a null
//! value". They are distinct values but order identically (see `compare`).
//!
//! # Equality
//!
//! `PartialEq` on `Value` is structural: `Int32(1) != Double(1.0)`. Use
//! `compare::values_equal` for the ordering-level equality used by sort and
//! duplicate key detection.

mod convert;
mod document;
mod errors;
mod object_id;
mod regular_expression;

pub use document::Document;
pub(crate) use document::MISSING;
pub use errors::{ConversionError, ConversionResult};
pub use object_id::ObjectId;
pub use regular_expression::RegularExpression;

use chrono::{DateTime, Utc};

/// A single document field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Field is absent
    Missing,
    /// Field is present and null
    Null,
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Double(f64),
    /// UTF-8 string
    String(String),
    /// Nested document (insertion ordered)
    Document(Document),
    /// Raw bytes
    Binary(Vec<u8>),
    /// 12-byte object identifier
    ObjectId(ObjectId),
    /// Boolean
    Boolean(bool),
    /// UTC instant, millisecond or finer resolution
    DateTime(DateTime<Utc>),
    /// Regular expression pattern with options
    RegularExpression(RegularExpression),
}

impl Value {
    /// Returns the type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Missing => "missing",
            Value::Null => "null",
            Value::Int32(_) => "int",
            Value::Int64(_) => "long",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Document(_) => "object",
            Value::Binary(_) => "binData",
            Value::ObjectId(_) => "objectId",
            Value::Boolean(_) => "bool",
            Value::DateTime(_) => "date",
            Value::RegularExpression(_) => "regex",
        }
    }

    /// Returns true for the absent-field sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Returns true for an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for Missing or Null
    pub fn is_null_or_missing(&self) -> bool {
        matches!(self, Value::Missing | Value::Null)
    }

    /// Returns true for any numeric representation
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int32(_) | Value::Int64(_) | Value::Double(_))
    }

    /// Normalizes a numeric value to f64.
    ///
    /// Int64 values beyond 2^53 lose precision.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int32(v) => Some(f64::from(*v)),
            Value::Int64(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as document if this is a Document value
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(d) => Some(d),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Value::Document(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl From<ObjectId> for Value {
    fn from(v: ObjectId) -> Self {
        Value::ObjectId(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<RegularExpression> for Value {
    fn from(v: RegularExpression) -> Self {
        Value::RegularExpression(v)
    }
}
