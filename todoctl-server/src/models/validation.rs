//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field must be a positive integer
    NotPositive { field: &'static str },

    /// Request body could not be parsed or is missing required fields
    MalformedBody { detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotPositive { field } => {
                write!(f, "{} must be a positive integer", field)
            }
            Self::MalformedBody { detail } => write!(f, "invalid request body: {}", detail),
        }
    }
}

impl std::error::Error for ValidationError {}
