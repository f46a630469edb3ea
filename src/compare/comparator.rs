//! Value comparator
//!
//! Defines a single total order over every `Value`:
//!
//! 1. Missing and Null are equal to each other and sort before everything
//! 2. Different type classes order by `SORT_PRIORITY`
//! 3. Same type class orders by a type-specific rule
//! 4. Documents compare field by field in insertion order, recursively
//!
//! Numbers compare by value across Int32/Int64/Double after normalizing to
//! f64. Int64 values beyond 2^53 lose precision in that normalization, so two
//! distinct large longs may compare Equal. NaN equals NaN and sorts above
//! every other number; `-0.0` equals `0.0`.

use std::cmp::Ordering;

use super::config::{ComparatorConfig, RegexOrdering};
use super::errors::{ComparatorError, ComparatorResult};
use super::type_class::TypeClass;
use crate::value::{Document, RegularExpression, Value, MISSING};

/// Stateless comparator over document values.
///
/// Safe to share across threads; holds only its immutable configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueComparator {
    config: ComparatorConfig,
}

impl ValueComparator {
    /// Creates a comparator with the given configuration
    pub const fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Compares two values of any type.
    ///
    /// Cross-type comparisons never fail. An error is only returned for a
    /// same-class pair without a comparison rule.
    pub fn compare(&self, a: &Value, b: &Value) -> ComparatorResult<Ordering> {
        if std::ptr::eq(a, b) {
            return Ok(Ordering::Equal);
        }

        if a.is_null_or_missing() && b.is_null_or_missing() {
            return Ok(Ordering::Equal);
        }

        let by_type = compare_types(a, b)?;
        if by_type != Ordering::Equal {
            return Ok(by_type);
        }

        if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
            return Ok(compare_doubles(x, y));
        }

        match (a, b) {
            (Value::ObjectId(x), Value::ObjectId(y)) => Ok(x.cmp(y)),
            (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
            (Value::DateTime(x), Value::DateTime(y)) => Ok(x.cmp(y)),
            (Value::Boolean(x), Value::Boolean(y)) => Ok(x.cmp(y)),
            (Value::Binary(x), Value::Binary(y)) => Ok(compare_binary(x, y)),
            (Value::Document(x), Value::Document(y)) => self.compare_documents(x, y),
            (Value::RegularExpression(x), Value::RegularExpression(y)) => {
                self.compare_regex(x, y)
            }
            _ => Err(ComparatorError::unsupported_comparison(a.type_name())),
        }
    }

    /// Compares two documents positionally.
    ///
    /// At each field index: type class of the values, then field names, then
    /// the values themselves. A document that runs out of fields contributes
    /// Missing, so a prefix sorts before the longer document.
    pub fn compare_documents(&self, a: &Document, b: &Document) -> ComparatorResult<Ordering> {
        for i in 0..a.len().max(b.len()) {
            let (key_a, value_a) = field_at(a, i);
            let (key_b, value_b) = field_at(b, i);

            let by_type = compare_types(value_a, value_b)?;
            if by_type != Ordering::Equal {
                return Ok(by_type);
            }

            // Absent key sorts first
            let by_key = key_a.cmp(&key_b);
            if by_key != Ordering::Equal {
                return Ok(by_key);
            }

            let by_value = self.compare(value_a, value_b)?;
            if by_value != Ordering::Equal {
                return Ok(by_value);
            }
        }

        Ok(Ordering::Equal)
    }

    fn compare_regex(
        &self,
        a: &RegularExpression,
        b: &RegularExpression,
    ) -> ComparatorResult<Ordering> {
        match self.config.regex_ordering {
            RegexOrdering::PatternThenOptions => Ok(a
                .pattern()
                .cmp(b.pattern())
                .then_with(|| a.options().cmp(b.options()))),
            RegexOrdering::Reject => Err(ComparatorError::unsupported_comparison("regex")),
        }
    }

    /// Returns true if the values compare Equal
    pub fn equal(&self, a: &Value, b: &Value) -> ComparatorResult<bool> {
        Ok(self.compare(a, b)? == Ordering::Equal)
    }

    /// Smallest value; the first of several equal minima wins
    pub fn min<'a, I>(&self, values: I) -> ComparatorResult<Option<&'a Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        self.select(values, Ordering::Less)
    }

    /// Largest value; the first of several equal maxima wins
    pub fn max<'a, I>(&self, values: I) -> ComparatorResult<Option<&'a Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        self.select(values, Ordering::Greater)
    }

    fn select<'a, I>(&self, values: I, wanted: Ordering) -> ComparatorResult<Option<&'a Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut best: Option<&'a Value> = None;
        for value in values {
            best = match best {
                Some(current) if self.compare(value, current)? != wanted => Some(current),
                _ => Some(value),
            };
        }
        Ok(best)
    }
}

/// Compares with the default configuration
pub fn compare_values(a: &Value, b: &Value) -> ComparatorResult<Ordering> {
    ValueComparator::default().compare(a, b)
}

/// Ordering-level equality with the default configuration.
///
/// `Int32(1)`, `Int64(1)` and `Double(1.0)` are equal here, which is what
/// duplicate key detection relies on.
pub fn values_equal(a: &Value, b: &Value) -> ComparatorResult<bool> {
    ValueComparator::default().equal(a, b)
}

/// Smallest value with the default configuration
pub fn min_value<'a, I>(values: I) -> ComparatorResult<Option<&'a Value>>
where
    I: IntoIterator<Item = &'a Value>,
{
    ValueComparator::default().min(values)
}

/// Largest value with the default configuration
pub fn max_value<'a, I>(values: I) -> ComparatorResult<Option<&'a Value>>
where
    I: IntoIterator<Item = &'a Value>,
{
    ValueComparator::default().max(values)
}

/// Missing/Null first, then type class rank
fn compare_types(a: &Value, b: &Value) -> ComparatorResult<Ordering> {
    match (a.is_null_or_missing(), b.is_null_or_missing()) {
        (true, true) => Ok(Ordering::Equal),
        (true, false) => Ok(Ordering::Less),
        (false, true) => Ok(Ordering::Greater),
        (false, false) => Ok(TypeClass::of(a)?.rank().cmp(&TypeClass::of(b)?.rank())),
    }
}

fn field_at(doc: &Document, index: usize) -> (Option<&str>, &Value) {
    match doc.get_index(index) {
        Some((key, value)) => (Some(key), value),
        None => (None, &MISSING),
    }
}

fn compare_doubles(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // -0.0 == 0.0 under IEEE comparison
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Shorter sorts first regardless of content, then unsigned bytewise
fn compare_binary(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
