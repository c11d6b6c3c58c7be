use axum::{Json, extract::State, response::IntoResponse};
use userhub_application::{GetUserError, GetUserUseCase};

use crate::http::{
    error::ApiError, extractors::AuthenticatedUser, response::ApiResponse, state::AppState,
};

/// GET /me - profile of the authenticated user.
///
/// A token whose subject row no longer exists is treated as invalid, not as
/// a missing resource.
#[tracing::instrument(name = "Me", skip_all)]
pub async fn me(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = GetUserUseCase::new(state.user_repository.as_ref());
    let user = use_case.execute(auth.user_id.value()).await.map_err(|e| {
        match e {
            GetUserError::UserNotFound(_) => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            other => other.into(),
        }
    })?;

    Ok(Json(ApiResponse::success().with_data(user.to_json())))
}
