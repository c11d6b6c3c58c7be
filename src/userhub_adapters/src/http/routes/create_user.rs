use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use userhub_application::CreateUserUseCase;

use crate::http::{
    error::ApiError,
    extractors::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
    validation::{FieldErrors, check_password, require},
};

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /users - registers a new user. 409 when the email is taken.
#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut errors = FieldErrors::default();
    require(&mut errors, "name", request.name.as_deref());
    require(&mut errors, "email", request.email.as_deref());
    if let Some(password) = require(&mut errors, "password", request.password.as_deref()) {
        check_password(&mut errors, password);
    }
    errors.into_result()?;

    let name = request.name.as_deref().unwrap_or_default();
    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    let use_case = CreateUserUseCase::new(
        state.user_repository.as_ref(),
        state.event_publisher.as_ref(),
    );
    let user = use_case.execute(name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::success()
                .with_message("User created successfully")
                .with_data(user.to_json()),
        ),
    ))
}
