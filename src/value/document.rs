//! Insertion-ordered documents
//!
//! A document is an ordered mapping from unique field name to value.
//! Insertion order is part of a document's identity for ordering purposes
//! and is never sorted.

use indexmap::IndexMap;

use super::Value;

pub(crate) static MISSING: Value = Value::Missing;

/// Ordered mapping of field name to value
#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: IndexMap<String, Value>,
}

impl Document {
    /// Creates an empty document
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Builds an array-shaped document keyed "0", "1", ...
    pub fn from_array(values: impl IntoIterator<Item = Value>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect()
    }

    /// Inserts a field.
    ///
    /// Replacing an existing key keeps its original position.
    /// Returns the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Looks up a field, returning `Value::Missing` when absent
    pub fn get_or_missing(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&MISSING)
    }

    /// Looks up a dotted path such as `address.city`.
    ///
    /// Returns `Value::Missing` when a segment is absent or a non-document
    /// value is traversed.
    pub fn get_path(&self, path: &str) -> &Value {
        let mut segments = path.split('.');
        let first = match segments.next() {
            Some(s) => s,
            None => return &MISSING,
        };

        let mut current = self.get_or_missing(first);
        for segment in segments {
            current = match current {
                Value::Document(doc) => doc.get_or_missing(segment),
                _ => return &MISSING,
            };
        }
        current
    }

    /// Removes a field, preserving the order of the remaining fields
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Returns true if the field is present (even if null)
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field at a position in insertion order
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.fields
            .get_index(index)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Order-sensitive, unlike IndexMap's own equality
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let doc = Document::new().with("b", 1).with("a", 2).with("c", 3);
        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut doc = Document::new().with("a", 1).with("b", 2);
        let previous = doc.insert("a", 10);
        assert_eq!(previous, Some(Value::Int32(1)));
        assert_eq!(doc.get_index(0), Some(("a", &Value::Int32(10))));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_get_or_missing() {
        let doc = Document::new().with("a", Value::Null);
        assert_eq!(doc.get_or_missing("a"), &Value::Null);
        assert_eq!(doc.get_or_missing("b"), &Value::Missing);
    }

    #[test]
    fn test_get_path() {
        let address = Document::new().with("city", "Berlin");
        let doc = Document::new().with("name", "x").with("address", address);

        assert_eq!(doc.get_path("address.city"), &Value::from("Berlin"));
        assert_eq!(doc.get_path("address.zip"), &Value::Missing);
        assert_eq!(doc.get_path("name.first"), &Value::Missing);
        assert_eq!(doc.get_path("name"), &Value::from("x"));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut doc = Document::new().with("a", 1).with("b", 2).with("c", 3);
        doc.remove("a");
        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab = Document::new().with("a", 1).with("b", 2);
        let ba = Document::new().with("b", 2).with("a", 1);
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_from_array() {
        let doc = Document::from_array(vec![Value::from("x"), Value::from("y")]);
        assert_eq!(doc.get("0"), Some(&Value::from("x")));
        assert_eq!(doc.get("1"), Some(&Value::from("y")));
    }
}
