//! Input validation for usernames.
//!
//! Usernames come out of the global database and are joined into per-user
//! database file names, so they must never contain path separators or other
//! characters with filesystem meaning.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value where one is required.
    Empty(String),
    /// Value too long.
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
    /// Character outside the allowed set.
    InvalidCharacter { field: String, character: char },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::InvalidCharacter { field, character } => {
                write!(f, "{} contains invalid character {:?}", field, character)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Validate a username for use as a database name component.
///
/// Usernames must be non-empty, at most [`MAX_USERNAME_LENGTH`] characters,
/// and restricted to ASCII letters, digits, and underscores.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Empty("username".to_string()));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LENGTH,
            actual: username.len(),
        });
    }

    for c in username.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Err(ValidationError::InvalidCharacter {
                field: "username".to_string(),
                character: c,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_valid() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob_42").is_ok());
        assert!(validate_username("A").is_ok());
    }

    #[test]
    fn test_validate_username_empty() {
        assert!(matches!(
            validate_username(""),
            Err(ValidationError::Empty(_))
        ));
    }

    #[test]
    fn test_validate_username_too_long() {
        let long = "a".repeat(MAX_USERNAME_LENGTH + 1);
        assert!(matches!(
            validate_username(&long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_username_invalid_characters() {
        // Path separators must never reach a file name.
        assert!(matches!(
            validate_username("../alice"),
            Err(ValidationError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            validate_username("alice/.."),
            Err(ValidationError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            validate_username("al ice"),
            Err(ValidationError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            validate_username("alice;drop"),
            Err(ValidationError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidCharacter {
            field: "username".to_string(),
            character: '/',
        };
        assert_eq!(err.to_string(), "username contains invalid character '/'");

        let err = ValidationError::TooLong {
            field: "username".to_string(),
            max: 64,
            actual: 80,
        };
        assert_eq!(err.to_string(), "username is too long (80 chars, max 64)");
    }
}
