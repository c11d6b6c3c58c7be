use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use userhub_application::UpdateUserUseCase;

use crate::http::{
    error::ApiError,
    extractors::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
    validation::{FieldErrors, check_password},
};

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PUT /users/{id} - each field is independently updatable. 400 when the
/// email belongs to a different user.
#[tracing::instrument(name = "Update user", skip(state, _auth, request))]
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::default();
    if let Some(password) = request.password.as_deref() {
        check_password(&mut errors, password);
    }
    errors.into_result()?;

    let use_case = UpdateUserUseCase::new(state.user_repository.as_ref());
    let user = use_case
        .execute(
            id,
            request.name.as_deref(),
            request.email.as_deref(),
            request.password.as_deref(),
        )
        .await?;

    Ok(Json(
        ApiResponse::success()
            .with_message("User updated successfully")
            .with_data(user.to_json()),
    ))
}
