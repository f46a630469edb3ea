//! docorder - Deterministic value ordering for a document database
//!
//! One total order over every value a document field can hold, used for
//! sort, range queries, min/max and duplicate key detection.
//!
//! ```
//! use docorder::compare::compare_values;
//! use docorder::value::Value;
//! use std::cmp::Ordering;
//!
//! let ordering = compare_values(&Value::Int32(1), &Value::Double(1.0)).unwrap();
//! assert_eq!(ordering, Ordering::Equal);
//! ```

pub mod compare;
pub mod observability;
pub mod sort;
pub mod value;
