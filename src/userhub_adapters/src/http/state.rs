use std::sync::Arc;

use userhub_core::{BannedTokenStore, EventPublisher, UserRepository};

use crate::auth::jwt::JwtIssuer;

/// Shared handler state. Ports are injected explicitly at construction;
/// there is no global container.
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub banned_token_store: Arc<dyn BannedTokenStore>,
    pub jwt: JwtIssuer,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        banned_token_store: Arc<dyn BannedTokenStore>,
        jwt: JwtIssuer,
    ) -> Self {
        Self {
            user_repository,
            event_publisher,
            banned_token_store,
            jwt,
        }
    }
}
