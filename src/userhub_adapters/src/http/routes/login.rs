use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use userhub_application::LoginUserUseCase;

use crate::auth::jwt::TOKEN_TYPE;
use crate::http::{
    error::ApiError,
    response::ApiResponse,
    state::AppState,
    validation::{FieldErrors, require},
};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /login - verifies credentials, then asks the token subsystem for an
/// access token. The use case itself never issues tokens.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::default();
    require(&mut errors, "email", request.email.as_deref());
    require(&mut errors, "password", request.password.as_deref());
    errors.into_result()?;

    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    let use_case = LoginUserUseCase::new(state.user_repository.as_ref());
    let user = use_case.execute(email, password).await?;

    let access_token = state.jwt.issue(user.id())?;

    Ok(Json(
        ApiResponse::success()
            .with_message("Login successful")
            .with_data(json!({
                "user": user.to_json(),
                "access_token": access_token,
                "token_type": TOKEN_TYPE,
            })),
    ))
}
