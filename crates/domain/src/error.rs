//! Unified error types for the domain layer
//!
//! Provides a common error type for form validation and value parsing,
//! so client services never have to fall back to bare strings.

use thiserror::Error;

/// Message shown when a form is submitted with required fields left blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a required form field is blank)
    #[error("{0}")]
    Validation(String),

    /// Parse error (for enum wire names, dates and times)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal state could not be reached (e.g., a poisoned lock)
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    /// Creates a validation error for form input that cannot be submitted.
    ///
    /// The message is shown to the user verbatim, so it carries no prefix.
    ///
    /// # Example
    /// ```ignore
    /// if title.trim().is_empty() {
    ///     return Err(DomainError::validation(REQUIRED_FIELDS_MESSAGE));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for the generic "required fields" validation failure.
    pub fn required_fields() -> Self {
        Self::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates an error for internal state the caller cannot fix.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_verbatim() {
        let err = DomainError::validation("Please provide a reason");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please provide a reason");
    }

    #[test]
    fn test_required_fields_error() {
        let err = DomainError::required_fields();
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Invalid appointment status: pending");
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Parse error: Invalid appointment status: pending"
        );
    }

    #[test]
    fn test_unavailable_error_is_not_validation() {
        let err = DomainError::unavailable("appointment list lock poisoned");
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Unavailable: appointment list lock poisoned");
    }
}
