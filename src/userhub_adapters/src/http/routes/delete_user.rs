use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use userhub_application::DeleteUserUseCase;

use crate::http::{
    error::ApiError, extractors::AuthenticatedUser, response::ApiResponse, state::AppState,
};

/// DELETE /users/{id} - immediate, irreversible deletion.
#[tracing::instrument(name = "Delete user", skip(state, _auth))]
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = DeleteUserUseCase::new(state.user_repository.as_ref());
    use_case.execute(id).await?;

    Ok(Json(
        ApiResponse::success().with_message("User deleted successfully"),
    ))
}
