//! Validation errors shared by the inquiry request types.

use std::fmt::{self, Display};

/// Errors produced by model validation routines.
///
/// Variants carry user-facing wording; the UI layer displays them verbatim
/// in field-level error toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty (after trimming whitespace).
    MissingField(&'static str),
    /// The email field did not match the `local@domain.tld` shape.
    InvalidEmail,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "please fill in your {field}")
            }
            ValidationError::InvalidEmail => {
                write!(f, "please enter a valid email address")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
