use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use userhub_core::UserId;

use super::{error::ApiError, state::AppState};

/// Extracts the bearer token, validates it, and rejects revoked tokens.
///
/// Rejection is always 401 with a generic message; handlers receive the
/// authenticated user id and the raw token (logout needs the latter).
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub token: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing access token".to_string()))?;

        let token = authorization
            .strip_prefix("Bearer ")
            .or_else(|| authorization.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization scheme".to_string()))?;

        let claims = state.jwt.verify(token)?;

        if state.banned_token_store.contains_token(token).await? {
            return Err(ApiError::Unauthorized("Token has been revoked".to_string()));
        }

        let user_id = UserId::new(claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            token: token.to_string(),
        })
    }
}
