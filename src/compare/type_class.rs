//! Type priority table
//!
//! Cross-type ordering, ascending:
//!
//! Number < String < Document < Binary < ObjectId < Boolean < DateTime < RegularExpression
//!
//! Missing and Null sort before all of these but are handled by the
//! comparator before ranking; they have no entry in the table. This order is
//! fixed by protocol compatibility and must not be reordered.

use std::fmt;

use super::errors::{ComparatorError, ComparatorResult};
use crate::value::Value;

/// Cross-type rank bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeClass {
    /// Int32, Int64 and Double
    Number,
    String,
    Document,
    Binary,
    ObjectId,
    Boolean,
    DateTime,
    RegularExpression,
}

/// Type classes in ascending sort order
pub const SORT_PRIORITY: [TypeClass; 8] = [
    TypeClass::Number,
    TypeClass::String,
    TypeClass::Document,
    TypeClass::Binary,
    TypeClass::ObjectId,
    TypeClass::Boolean,
    TypeClass::DateTime,
    TypeClass::RegularExpression,
];

impl TypeClass {
    /// Returns the type class of a value.
    ///
    /// Missing and Null are never ranked and yield `UnsupportedType`.
    pub fn of(value: &Value) -> ComparatorResult<Self> {
        match value {
            Value::Int32(_) | Value::Int64(_) | Value::Double(_) => Ok(TypeClass::Number),
            Value::String(_) => Ok(TypeClass::String),
            Value::Document(_) => Ok(TypeClass::Document),
            Value::Binary(_) => Ok(TypeClass::Binary),
            Value::ObjectId(_) => Ok(TypeClass::ObjectId),
            Value::Boolean(_) => Ok(TypeClass::Boolean),
            Value::DateTime(_) => Ok(TypeClass::DateTime),
            Value::RegularExpression(_) => Ok(TypeClass::RegularExpression),
            Value::Missing | Value::Null => Err(ComparatorError::unsupported_type(value.type_name())),
        }
    }

    /// Position in `SORT_PRIORITY`
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns the class name
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeClass::Number => "number",
            TypeClass::String => "string",
            TypeClass::Document => "object",
            TypeClass::Binary => "binData",
            TypeClass::ObjectId => "objectId",
            TypeClass::Boolean => "bool",
            TypeClass::DateTime => "date",
            TypeClass::RegularExpression => "regex",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparatorErrorCode;
    use crate::value::{Document, ObjectId, RegularExpression};
    use chrono::Utc;

    #[test]
    fn test_rank_matches_table_position() {
        for (i, class) in SORT_PRIORITY.iter().enumerate() {
            assert_eq!(class.rank(), i);
        }
    }

    #[test]
    fn test_table_is_ascending() {
        for pair in SORT_PRIORITY.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_every_present_variant_is_ranked() {
        let values = vec![
            Value::Int32(1),
            Value::Int64(1),
            Value::Double(1.0),
            Value::from("a"),
            Value::Document(Document::new()),
            Value::Binary(vec![]),
            Value::ObjectId(ObjectId::from_bytes([0; 12])),
            Value::Boolean(true),
            Value::DateTime(Utc::now()),
            Value::RegularExpression(RegularExpression::new("a", "")),
        ];
        let classes: Vec<_> = values.iter().map(|v| TypeClass::of(v).unwrap()).collect();
        assert_eq!(classes[0], TypeClass::Number);
        assert_eq!(classes[2], TypeClass::Number);
        assert_eq!(&classes[2..], &SORT_PRIORITY[..]);
    }

    #[test]
    fn test_null_and_missing_are_not_ranked() {
        let err = TypeClass::of(&Value::Null).unwrap_err();
        assert_eq!(err.code(), ComparatorErrorCode::UnsupportedType);

        let err = TypeClass::of(&Value::Missing).unwrap_err();
        assert_eq!(err.type_name(), "missing");
    }
}
