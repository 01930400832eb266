//! Error types for quote input validation
//!
//! The engine itself never fails; these errors come from the optional
//! validation pass callers run before quoting or when loading tables.

use thiserror::Error;

/// Validation error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    /// Money value is NaN, infinite, negative or too large
    #[error("Invalid amount for {field}: {reason}")]
    InvalidAmount { field: String, reason: String },

    /// Quantity out of range
    #[error("Invalid quantity for {field}: {reason}")]
    InvalidQuantity { field: String, reason: String },

    /// Tier table is not ascending / non-overlapping
    #[error("Invalid tier table: {0}")]
    InvalidTier(String),

    /// Rate outside its allowed range
    #[error("Invalid rate for {field}: {value}")]
    InvalidRate { field: String, value: f64 },

    /// Required field is empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Design references something the tables cannot price
    #[error("Invalid design {design_id}: {reason}")]
    InvalidDesign { design_id: String, reason: String },
}

impl QuoteError {
    pub fn amount(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn quantity(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for validation
pub type QuoteResult<T> = Result<T, QuoteError>;
