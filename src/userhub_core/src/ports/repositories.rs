use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User, user_id::UserId};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    /// A store-level uniqueness constraint rejected the write. The use
    /// cases guard uniqueness up front; this is the backing store's
    /// backstop when a race slips past the check.
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("Unexpected repository error: {0}")]
    Unexpected(String),
}

/// Persistence port for the user aggregate.
///
/// `find_*` operations return `None` on absence instead of failing; the use
/// cases decide whether absence is an error. `save` has upsert semantics:
/// insert when the id is unknown, otherwise replace the mutable fields.
/// `delete` is idempotent - removing an absent id is not an error.
///
/// `next_id` allocates max(existing id) + 1. This is not safe under
/// concurrent creation; correctness depends on the backing store's
/// guarantees, which this design deliberately does not leverage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError>;
    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<User>, UserRepositoryError>;
    async fn save(&self, user: User) -> Result<User, UserRepositoryError>;
    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError>;
    async fn next_id(&self) -> Result<i64, UserRepositoryError>;
}

// BannedTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum BannedTokenStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Store for revoked access tokens.
#[async_trait]
pub trait BannedTokenStore: Send + Sync {
    async fn ban_token(&self, token: String) -> Result<(), BannedTokenStoreError>;
    async fn contains_token(&self, token: &str) -> Result<bool, BannedTokenStoreError>;
}
