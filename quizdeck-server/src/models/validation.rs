//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// List has the wrong number of entries
    WrongCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Number outside the accepted range
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },

    /// Request body or query string could not be decoded
    Malformed { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::WrongCount {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{} must contain exactly {} entries (got {})",
                field, expected, actual
            ),
            Self::OutOfRange { field, reason } => write!(f, "{}: {}", field, reason),
            Self::Malformed { message } => write!(f, "malformed request: {}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `value` and check it is non-empty and at most `max` characters.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    bounded(field, trimmed, max)
}

/// Non-blank check like [`required_text`], but the value is kept exactly as
/// sent. Used for quiz content, which must read back unchanged.
pub(crate) fn required_verbatim(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    bounded(field, value, max)
}

/// Length check only; the value is kept exactly as sent, blank included.
pub(crate) fn verbatim_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    bounded(field, value, max)
}

/// Like [`required_text`] but an empty value is accepted.
pub(crate) fn optional_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    bounded(field, value.trim(), max)
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}
