use std::sync::Arc;

use redis::{Commands, Connection};
use tokio::sync::Mutex;
use userhub_core::{BannedTokenStore, BannedTokenStoreError};

/// Redis-backed banned token store. Entries expire together with the token
/// they revoke.
#[derive(Clone)]
pub struct RedisBannedTokenStore {
    conn: Arc<Mutex<Connection>>,
    token_ttl: u64,
}

impl RedisBannedTokenStore {
    pub fn new(conn: Arc<Mutex<Connection>>, token_ttl: u64) -> Self {
        Self { conn, token_ttl }
    }
}

#[async_trait::async_trait]
impl BannedTokenStore for RedisBannedTokenStore {
    #[tracing::instrument(name = "Banning token in Redis", skip_all)]
    async fn ban_token(&self, token: String) -> Result<(), BannedTokenStoreError> {
        let key = get_key(&token);

        let mut conn = self.conn.lock().await;
        conn.set_ex(key, true, self.token_ttl)
            .map_err(|e| BannedTokenStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Checking banned token in Redis", skip_all)]
    async fn contains_token(&self, token: &str) -> Result<bool, BannedTokenStoreError> {
        let key = get_key(token);

        let mut conn = self.conn.lock().await;
        conn.exists(&key)
            .map_err(|e| BannedTokenStoreError::DatabaseError(e.to_string()))
    }
}

// Key prefix to prevent collisions with other keyspaces.
const BANNED_TOKEN_KEY_PREFIX: &str = "banned_token:";

fn get_key(token: &str) -> String {
    format!("{BANNED_TOKEN_KEY_PREFIX}{token}")
}
