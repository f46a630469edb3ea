//! Comparator error types
//!
//! Error codes:
//! - ORDER_UNSUPPORTED_TYPE (ERROR)
//! - ORDER_UNSUPPORTED_COMPARISON (ERROR)
//!
//! Both are logic errors: fatal to the comparison call, never retried.

use std::fmt;

use crate::observability::Severity;

/// Comparator error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorErrorCode {
    /// Value has no entry in the type priority table
    UnsupportedType,
    /// Values share a type class with no comparison rule
    UnsupportedComparison,
}

impl ComparatorErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ComparatorErrorCode::UnsupportedType => "ORDER_UNSUPPORTED_TYPE",
            ComparatorErrorCode::UnsupportedComparison => "ORDER_UNSUPPORTED_COMPARISON",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ComparatorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Comparator error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparatorError {
    code: ComparatorErrorCode,
    type_name: &'static str,
    message: String,
}

impl ComparatorError {
    /// Value variant cannot be ranked
    pub fn unsupported_type(type_name: &'static str) -> Self {
        Self {
            code: ComparatorErrorCode::UnsupportedType,
            type_name,
            message: format!("can't sort {}", type_name),
        }
    }

    /// No value-level rule for this type class
    pub fn unsupported_comparison(type_name: &'static str) -> Self {
        Self {
            code: ComparatorErrorCode::UnsupportedComparison,
            type_name,
            message: format!("can't compare {}", type_name),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ComparatorErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Type name of the offending value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ComparatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ComparatorError {}

/// Result type for comparator operations
pub type ComparatorResult<T> = Result<T, ComparatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ComparatorErrorCode::UnsupportedType.code(),
            "ORDER_UNSUPPORTED_TYPE"
        );
        assert_eq!(
            ComparatorErrorCode::UnsupportedComparison.code(),
            "ORDER_UNSUPPORTED_COMPARISON"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ComparatorError::unsupported_comparison("regex");
        let display = format!("{}", err);
        assert!(display.contains("ERROR"));
        assert!(display.contains("ORDER_UNSUPPORTED_COMPARISON"));
        assert!(display.contains("regex"));
    }

    #[test]
    fn test_accessors() {
        let err = ComparatorError::unsupported_type("null");
        assert_eq!(err.code(), ComparatorErrorCode::UnsupportedType);
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.severity().as_str(), "ERROR");
        assert!(crate::observability::Logger::enabled(err.severity()));
        assert_eq!(err.type_name(), "null");
        assert_eq!(err.message(), "can't sort null");
    }
}
