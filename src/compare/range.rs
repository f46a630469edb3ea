//! Range boundary tests
//!
//! A `ValueRange` answers `$gt` / `$gte` / `$lt` / `$lte` style questions
//! using the value comparator, so bounds are cross-type: a lower bound of
//! `5` admits every string, since strings sort after numbers.

use std::cmp::Ordering;

use super::comparator::ValueComparator;
use super::errors::ComparatorResult;
use crate::value::Value;

/// One side of a range
#[derive(Debug, Clone, PartialEq)]
pub enum RangeBound {
    /// No limit on this side
    Unbounded,
    /// Boundary value is part of the range
    Included(Value),
    /// Boundary value is not part of the range
    Excluded(Value),
}

/// Interval over the value order
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    /// Lower bound
    pub lower: RangeBound,
    /// Upper bound
    pub upper: RangeBound,
}

impl ValueRange {
    /// Range containing every value
    pub fn all() -> Self {
        Self {
            lower: RangeBound::Unbounded,
            upper: RangeBound::Unbounded,
        }
    }

    /// value > bound
    pub fn gt(bound: impl Into<Value>) -> Self {
        Self {
            lower: RangeBound::Excluded(bound.into()),
            upper: RangeBound::Unbounded,
        }
    }

    /// value >= bound
    pub fn gte(bound: impl Into<Value>) -> Self {
        Self {
            lower: RangeBound::Included(bound.into()),
            upper: RangeBound::Unbounded,
        }
    }

    /// value < bound
    pub fn lt(bound: impl Into<Value>) -> Self {
        Self {
            lower: RangeBound::Unbounded,
            upper: RangeBound::Excluded(bound.into()),
        }
    }

    /// value <= bound
    pub fn lte(bound: impl Into<Value>) -> Self {
        Self {
            lower: RangeBound::Unbounded,
            upper: RangeBound::Included(bound.into()),
        }
    }

    /// lower <= value <= upper
    pub fn between(lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        Self {
            lower: RangeBound::Included(lower.into()),
            upper: RangeBound::Included(upper.into()),
        }
    }

    /// Checks membership with the default comparator
    pub fn contains(&self, value: &Value) -> ComparatorResult<bool> {
        self.contains_with(&ValueComparator::default(), value)
    }

    /// Checks membership with a specific comparator
    pub fn contains_with(
        &self,
        comparator: &ValueComparator,
        value: &Value,
    ) -> ComparatorResult<bool> {
        let above_lower = match &self.lower {
            RangeBound::Unbounded => true,
            RangeBound::Included(bound) => comparator.compare(value, bound)? != Ordering::Less,
            RangeBound::Excluded(bound) => comparator.compare(value, bound)? == Ordering::Greater,
        };
        if !above_lower {
            return Ok(false);
        }

        let below_upper = match &self.upper {
            RangeBound::Unbounded => true,
            RangeBound::Included(bound) => comparator.compare(value, bound)? != Ordering::Greater,
            RangeBound::Excluded(bound) => comparator.compare(value, bound)? == Ordering::Less,
        };
        Ok(below_upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparatorConfig;
    use crate::value::RegularExpression;

    #[test]
    fn test_gt_excludes_bound() {
        let range = ValueRange::gt(5);
        assert!(!range.contains(&Value::Int32(5)).unwrap());
        assert!(!range.contains(&Value::Double(5.0)).unwrap());
        assert!(range.contains(&Value::Int64(6)).unwrap());
    }

    #[test]
    fn test_gte_includes_equal_representations() {
        let range = ValueRange::gte(1);
        assert!(range.contains(&Value::Double(1.0)).unwrap());
        assert!(!range.contains(&Value::Double(0.999)).unwrap());
    }

    #[test]
    fn test_lt_and_lte() {
        assert!(ValueRange::lt(10).contains(&Value::Int32(9)).unwrap());
        assert!(!ValueRange::lt(10).contains(&Value::Int32(10)).unwrap());
        assert!(ValueRange::lte(10).contains(&Value::Int32(10)).unwrap());
    }

    #[test]
    fn test_between() {
        let range = ValueRange::between("b", "d");
        assert!(range.contains(&Value::from("c")).unwrap());
        assert!(range.contains(&Value::from("d")).unwrap());
        assert!(!range.contains(&Value::from("da")).unwrap());
        assert!(!range.contains(&Value::from("a")).unwrap());
    }

    #[test]
    fn test_bounds_are_cross_type() {
        let range = ValueRange::gt(5);
        assert!(range.contains(&Value::from("text")).unwrap());
        assert!(!range.contains(&Value::Null).unwrap());
        assert!(!range.contains(&Value::Missing).unwrap());
    }

    #[test]
    fn test_all_contains_missing() {
        assert!(ValueRange::all().contains(&Value::Missing).unwrap());
    }

    #[test]
    fn test_comparator_errors_surface() {
        let comparator = ValueComparator::new(ComparatorConfig::reject_regex());
        let range = ValueRange::gte(RegularExpression::new("a", ""));
        let value = Value::RegularExpression(RegularExpression::new("b", ""));
        assert!(range.contains_with(&comparator, &value).is_err());
    }
}
