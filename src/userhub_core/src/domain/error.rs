use thiserror::Error;

/// Errors raised when a value object invariant is violated at construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("User name cannot be empty")]
    EmptyUserName,
    #[error("User name cannot exceed 255 characters")]
    UserNameTooLong,
    #[error("User ID must be a positive integer")]
    NonPositiveUserId,
}
