use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use userhub_application::ListUsersUseCase;
use userhub_core::User;

use crate::http::{
    error::ApiError, extractors::AuthenticatedUser, response::ApiResponse, state::AppState,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// GET /users?page&per_page - paginated listing. The meta block echoes the
/// requested page; no total count is computed.
#[tracing::instrument(name = "List users", skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);

    let use_case = ListUsersUseCase::new(state.user_repository.as_ref());
    let users = use_case.execute(page, per_page).await?;

    Ok(Json(
        ApiResponse::success()
            .with_data(Value::Array(users.iter().map(User::to_json).collect()))
            .with_meta(json!({"page": page, "per_page": per_page})),
    ))
}
