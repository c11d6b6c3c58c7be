use std::{collections::HashSet, sync::Arc};

use tokio::sync::RwLock;
use userhub_core::{BannedTokenStore, BannedTokenStoreError};

/// In-memory banned token store for tests and local wiring.
#[derive(Debug, Default, Clone)]
pub struct HashSetBannedTokenStore {
    banned_tokens: Arc<RwLock<HashSet<String>>>,
}

impl HashSetBannedTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BannedTokenStore for HashSetBannedTokenStore {
    async fn ban_token(&self, token: String) -> Result<(), BannedTokenStoreError> {
        self.banned_tokens.write().await.insert(token);
        Ok(())
    }

    async fn contains_token(&self, token: &str) -> Result<bool, BannedTokenStoreError> {
        Ok(self.banned_tokens.read().await.contains(token))
    }
}
