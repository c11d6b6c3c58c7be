use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;
use userhub_application::{
    CreateUserError, DeleteUserError, GetUserError, LoginError, LogoutError, UpdateUserError,
};
use userhub_core::{BannedTokenStoreError, UserRepositoryError, ValidationError};

use super::response::ApiResponse;
use crate::auth::jwt::TokenError;

/// Boundary error for the HTTP surface. Every use-case error converts into
/// one of these; the variants carry the status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    ValidationFailed { errors: Value },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Duplicate email on update maps to 400, not the 409 used on create.
    #[error("{0}")]
    EmailTaken(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal server error")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            ApiError::ValidationFailed { errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::failure("Validation failed").with_errors(errors),
            ),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ApiResponse::failure(message))
            }
            ApiError::Conflict(message) => {
                (StatusCode::CONFLICT, ApiResponse::failure(message))
            }
            ApiError::EmailTaken(message) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(message))
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, ApiResponse::failure(message))
            }
            ApiError::Unexpected(detail) => {
                // Detail goes to the log, never to the client.
                tracing::error!(error = %detail, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure("Internal server error"),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Builds a field-keyed errors map for a single value-object failure.
fn validation_errors(error: &ValidationError) -> Value {
    let field = match error {
        ValidationError::EmptyEmail | ValidationError::InvalidEmailFormat => "email",
        ValidationError::EmptyUserName | ValidationError::UserNameTooLong => "name",
        ValidationError::NonPositiveUserId => "id",
    };
    json!({ field: [error.to_string()] })
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::ValidationFailed {
            errors: validation_errors(&error),
        }
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::Conflict(detail) => ApiError::Conflict(detail),
            UserRepositoryError::Unexpected(detail) => ApiError::Unexpected(detail),
        }
    }
}

impl From<BannedTokenStoreError> for ApiError {
    fn from(error: BannedTokenStoreError) -> Self {
        ApiError::Unexpected(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Invalid => ApiError::Unauthorized(error.to_string()),
            TokenError::Creation(detail) => ApiError::Unexpected(detail),
        }
    }
}

impl From<CreateUserError> for ApiError {
    fn from(error: CreateUserError) -> Self {
        match error {
            CreateUserError::UserAlreadyExists(_) => ApiError::Conflict(error.to_string()),
            CreateUserError::Validation(e) => e.into(),
            CreateUserError::PasswordHash(e) => ApiError::Unexpected(e.to_string()),
            CreateUserError::Repository(e) => e.into(),
        }
    }
}

impl From<UpdateUserError> for ApiError {
    fn from(error: UpdateUserError) -> Self {
        match error {
            UpdateUserError::UserNotFound(_) => ApiError::NotFound(error.to_string()),
            UpdateUserError::EmailTaken(_) => ApiError::EmailTaken(error.to_string()),
            UpdateUserError::Validation(e) => e.into(),
            UpdateUserError::PasswordHash(e) => ApiError::Unexpected(e.to_string()),
            UpdateUserError::Repository(e) => e.into(),
        }
    }
}

impl From<DeleteUserError> for ApiError {
    fn from(error: DeleteUserError) -> Self {
        match error {
            DeleteUserError::UserNotFound(_) => ApiError::NotFound(error.to_string()),
            DeleteUserError::Validation(e) => e.into(),
            DeleteUserError::Repository(e) => e.into(),
        }
    }
}

impl From<GetUserError> for ApiError {
    fn from(error: GetUserError) -> Self {
        match error {
            GetUserError::UserNotFound(_) => ApiError::NotFound(error.to_string()),
            GetUserError::Validation(e) => e.into(),
            GetUserError::Repository(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            LoginError::Validation(e) => e.into(),
            LoginError::Repository(e) => e.into(),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::BannedTokenStore(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_keyed_by_field() {
        let errors = validation_errors(&ValidationError::InvalidEmailFormat);
        assert_eq!(errors, json!({"email": ["Invalid email format"]}));

        let errors = validation_errors(&ValidationError::UserNameTooLong);
        assert_eq!(
            errors,
            json!({"name": ["User name cannot exceed 255 characters"]})
        );
    }

    #[test]
    fn test_login_errors_map_to_unauthorized() {
        let api_error: ApiError = LoginError::InvalidCredentials.into();
        assert!(matches!(api_error, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_duplicate_email_on_create_maps_to_conflict() {
        let api_error: ApiError =
            CreateUserError::UserAlreadyExists("john@x.com".to_string()).into();
        assert!(matches!(api_error, ApiError::Conflict(_)));
    }

    #[test]
    fn test_taken_email_on_update_maps_to_bad_request() {
        let api_error: ApiError = UpdateUserError::EmailTaken("john@x.com".to_string()).into();
        assert!(matches!(api_error, ApiError::EmailTaken(_)));
    }
}
