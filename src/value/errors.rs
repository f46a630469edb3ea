//! Value conversion errors

use thiserror::Error;

/// Result type for value conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised while building values from external representations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid ObjectId: {0}")]
    InvalidObjectId(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid base64 binary: {0}")]
    InvalidBinary(String),

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    #[error("Unknown regular expression option: {0}")]
    UnknownRegexOption(char),

    #[error("Invalid $numberLong: {0}")]
    InvalidNumberLong(String),

    #[error("Invalid $numberDouble: {0}")]
    InvalidNumberDouble(String),
}
