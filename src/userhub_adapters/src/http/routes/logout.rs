use axum::{Json, extract::State, response::IntoResponse};
use userhub_application::LogoutUseCase;

use crate::http::{
    error::ApiError, extractors::AuthenticatedUser, response::ApiResponse, state::AppState,
};

/// POST /logout - revokes the presented access token.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let use_case = LogoutUseCase::new(state.banned_token_store.as_ref());
    use_case.execute(auth.token).await?;

    Ok(Json(
        ApiResponse::success().with_message("Logged out successfully"),
    ))
}
