//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Number below the allowed minimum
    TooSmall { field: &'static str, min: u64 },

    /// Number above the allowed maximum
    TooLarge { field: &'static str, max: u64 },

    /// Query string could not be decoded into the expected types
    InvalidQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { field, min } => {
                write!(f, "{} must be greater than or equal to {}", field, min)
            }
            Self::TooLarge { field, max } => {
                write!(f, "{} must be less than or equal to {}", field, max)
            }
            Self::InvalidQuery { reason } => write!(f, "invalid query parameters: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
