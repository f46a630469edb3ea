//! Sorting built on the value comparator
//!
//! # Sort Flow
//!
//! 1. Parse or build a `SortSpec` (field paths with directions)
//! 2. Resolve each key on both documents (absent = Missing)
//! 3. Compare with the value comparator, reversing descending keys
//! 4. First non-Equal key decides; ties keep their input order
//!
//! A comparator error aborts the whole sort and is surfaced to the caller.

mod errors;
mod sorter;
mod spec;

pub use errors::{SortError, SortResult};
pub use sorter::{sort_values, DocumentSorter};
pub use spec::{SortDirection, SortKey, SortSpec};
