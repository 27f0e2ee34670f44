//! Field validation shared by all catalog records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction-time validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyCategory,
    EmptyTitle,
    /// A referenced record has no id yet. Carries the entity kind.
    UnsavedReference(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name must be a non-empty string"),
            Self::EmptyCategory => write!(f, "Category must be a non-empty string"),
            Self::EmptyTitle => write!(f, "Title must be a non-empty string"),
            Self::UnsavedReference(kind) => {
                write!(f, "{kind} must be saved before it can be referenced")
            }
        }
    }
}

impl Error for ValidationError {}

/// Rejects zero-length values. Whitespace-only input is accepted.
pub(crate) fn require_non_empty(
    value: String,
    on_empty: ValidationError,
) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(on_empty)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{require_non_empty, ValidationError};

    #[test]
    fn empty_value_is_rejected_with_given_error() {
        let err = require_non_empty(String::new(), ValidationError::EmptyTitle).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "Title must be a non-empty string");
    }

    #[test]
    fn whitespace_only_value_is_kept_verbatim() {
        let value = require_non_empty("  ".to_string(), ValidationError::EmptyName).unwrap();
        assert_eq!(value, "  ");
    }
}
