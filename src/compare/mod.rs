//! Value ordering subsystem
//!
//! Defines the single total order used by sort, range queries, min/max and
//! duplicate key detection.
//!
//! # Comparison Flow (strict order)
//!
//! 1. Same instance: Equal
//! 2. Both Missing-or-Null: Equal
//! 3. Exactly one Missing-or-Null: that one sorts first
//! 4. Different type classes: order by `SORT_PRIORITY`
//! 5. Same type class: type-specific rule, recursing into documents
//!
//! # Invariants
//!
//! - Total: any two values produce Less, Equal or Greater
//! - Antisymmetric and transitive
//! - Pure: no state, no I/O, safe to call from any thread

mod comparator;
mod config;
mod errors;
mod range;
mod type_class;

pub use comparator::{compare_values, max_value, min_value, values_equal, ValueComparator};
pub use config::{ComparatorConfig, RegexOrdering};
pub use errors::{ComparatorError, ComparatorErrorCode, ComparatorResult};
pub use range::{RangeBound, ValueRange};
pub use type_class::{TypeClass, SORT_PRIORITY};
