use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use userhub_core::{Email, User, UserId, UserRepository, UserRepositoryError};

/// In-memory repository for tests and local wiring.
///
/// Natural order for `find_all` is id-ascending. `next_id` reproduces the
/// max(id)+1 allocation of the store-backed implementation, including its
/// unsafety under concurrent creation.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().await.get(&id.value()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|user| user.id());

        let skip = (page.max(1) - 1) as usize * per_page as usize;
        Ok(all.into_iter().skip(skip).take(per_page as usize).collect())
    }

    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        self.users
            .write()
            .await
            .insert(user.id().value(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        // Idempotent: removing an absent id is not an error.
        self.users.write().await.remove(&id.value());
        Ok(())
    }

    async fn next_id(&self) -> Result<i64, UserRepositoryError> {
        let max = self.users.read().await.keys().max().copied().unwrap_or(0);
        Ok(max + 1)
    }
}
