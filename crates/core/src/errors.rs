//! Core error types for the Divfolio aggregation crate.
//!
//! The arithmetic itself never fails: zero denominators yield zero, and
//! lists whose totals would leave the `Decimal` range are rejected during
//! validation. Errors come from such input and from the collaborators that
//! supply positions.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio calculation failed: {0}")]
    Calculation(String),

    #[error("Position provider error: {0}")]
    Repository(String),
}

/// Validation errors for caller-supplied positions and goals.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Position {symbol}: {field} must not be negative (got {value})")]
    NegativeValue {
        symbol: String,
        field: &'static str,
        value: Decimal,
    },

    #[error("Malformed input data: {0}")]
    Malformed(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Malformed(err.to_string()))
    }
}
