//! Error types for identifier normalization.

use thiserror::Error;

/// Errors that can occur while normalizing labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Label rendered to empty text, or was null.
    #[error("label at index {index} is empty or null")]
    InvalidInput { index: usize },

    /// Options leave no room for a collision suffix.
    #[error("max length {max_length} must exceed the collision suffix reserve of {reserve}")]
    InvalidMaxLength { max_length: usize, reserve: usize },

    /// Every suffix that fits within the length limit is already taken.
    #[error("no free collision suffix for '{candidate}' within {max_length} characters")]
    CollisionSpaceExhausted {
        candidate: String,
        max_length: usize,
    },

    /// String does not satisfy the identifier invariants.
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: &'static str },
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

impl NormalizeError {
    /// Create an InvalidInput error for the label at `index`.
    pub fn invalid_input(index: usize) -> Self {
        Self::InvalidInput { index }
    }

    /// Create an InvalidIdentifier error.
    pub fn invalid_identifier(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::invalid_input(3);
        assert_eq!(format!("{err}"), "label at index 3 is empty or null");

        let err = NormalizeError::invalid_identifier("2abc", "must not start with a digit");
        assert_eq!(
            format!("{err}"),
            "invalid identifier '2abc': must not start with a digit"
        );
    }

    #[test]
    fn test_max_length_error_mentions_limits() {
        let err = NormalizeError::InvalidMaxLength {
            max_length: 4,
            reserve: 4,
        };
        let text = format!("{err}");
        assert!(text.contains("max length 4"));
        assert!(text.contains("reserve of 4"));
    }

    #[test]
    fn test_collision_space_error_display() {
        let err = NormalizeError::CollisionSpaceExhausted {
            candidate: "a".to_string(),
            max_length: 3,
        };
        assert_eq!(
            format!("{err}"),
            "no free collision suffix for 'a' within 3 characters"
        );
    }
}
