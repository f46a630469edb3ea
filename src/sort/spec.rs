//! Sort specifications
//!
//! A sort specification is an ordered list of field paths with a direction
//! each. Parsed from documents shaped like `{"age": -1, "name": 1}`.

use super::errors::{SortError, SortResult};
use crate::value::{Document, Value};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    fn from_value(field: &str, value: &Value) -> SortResult<Self> {
        match value.as_f64() {
            Some(v) if v == 1.0 => Ok(SortDirection::Ascending),
            Some(v) if v == -1.0 => Ok(SortDirection::Descending),
            _ => Err(SortError::InvalidDirection {
                field: field.to_string(),
                found: value.to_json().to_string(),
            }),
        }
    }
}

/// One key of a sort specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Field path, dotted for nested fields
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

/// Ordered list of sort keys; earlier keys take precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Single ascending key
    pub fn asc(field: impl Into<String>) -> Self {
        Self::default().then_asc(field)
    }

    /// Single descending key
    pub fn desc(field: impl Into<String>) -> Self {
        Self::default().then_desc(field)
    }

    /// Appends an ascending key
    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            field: field.into(),
            direction: SortDirection::Ascending,
        });
        self
    }

    /// Appends a descending key
    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            field: field.into(),
            direction: SortDirection::Descending,
        });
        self
    }

    /// Parses `{field: 1 | -1, ...}`, keeping field order
    pub fn from_document(doc: &Document) -> SortResult<Self> {
        let mut keys = Vec::with_capacity(doc.len());
        for (field, value) in doc.iter() {
            if field.is_empty() {
                return Err(SortError::EmptyField);
            }
            keys.push(SortKey {
                field: field.to_string(),
                direction: SortDirection::from_value(field, value)?,
            });
        }
        Ok(Self { keys })
    }

    /// Sort keys in precedence order
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns true if no keys are specified
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_order() {
        let spec = SortSpec::desc("age").then_asc("name");
        assert_eq!(spec.keys()[0].field, "age");
        assert_eq!(spec.keys()[0].direction, SortDirection::Descending);
        assert_eq!(spec.keys()[1].direction, SortDirection::Ascending);
    }

    #[test]
    fn test_from_document() {
        let doc = Document::new()
            .with("b", -1)
            .with("a", 1.0)
            .with("c", 1i64);
        let spec = SortSpec::from_document(&doc).unwrap();
        let fields: Vec<_> = spec.keys().iter().map(|k| k.field.as_str()).collect();
        assert_eq!(fields, vec!["b", "a", "c"]);
        assert_eq!(spec.keys()[0].direction, SortDirection::Descending);
    }

    #[test]
    fn test_from_document_rejects_bad_direction() {
        let doc = Document::new().with("age", "up");
        let err = SortSpec::from_document(&doc).unwrap_err();
        assert!(matches!(err, SortError::InvalidDirection { .. }));

        let doc = Document::new().with("age", 2);
        assert!(SortSpec::from_document(&doc).is_err());
    }

    #[test]
    fn test_from_document_rejects_empty_field() {
        let doc = Document::new().with("", 1);
        assert_eq!(SortSpec::from_document(&doc).unwrap_err(), SortError::EmptyField);
    }

    #[test]
    fn test_empty_spec() {
        let spec = SortSpec::from_document(&Document::new()).unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(SortDirection::Ascending.as_str(), "asc");
        assert_eq!(SortDirection::Descending.as_str(), "desc");
    }
}
