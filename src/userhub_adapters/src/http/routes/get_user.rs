use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use userhub_application::GetUserUseCase;

use crate::http::{
    error::ApiError, extractors::AuthenticatedUser, response::ApiResponse, state::AppState,
};

/// GET /users/{id}
#[tracing::instrument(name = "Get user", skip(state, _auth))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = GetUserUseCase::new(state.user_repository.as_ref());
    let user = use_case.execute(id).await?;

    Ok(Json(ApiResponse::success().with_data(user.to_json())))
}
