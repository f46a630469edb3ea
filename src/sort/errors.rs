//! Sort errors

use thiserror::Error;

use crate::compare::ComparatorError;

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Sort errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    #[error("Invalid sort direction for field {field}: {found}")]
    InvalidDirection { field: String, found: String },

    #[error("Empty sort field name")]
    EmptyField,

    #[error("Sort aborted: {0}")]
    Comparison(#[from] ComparatorError),
}

impl SortError {
    /// Returns true if the sort specification itself was rejected
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, SortError::InvalidDirection { .. } | SortError::EmptyField)
    }
}
