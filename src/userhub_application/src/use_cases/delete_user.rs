use userhub_core::{UserId, UserRepository, UserRepositoryError, ValidationError};

/// Error types specific to the delete user use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User with ID {0} not found")]
    UserNotFound(i64),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Delete user use case - deletion is immediate, no tombstones.
pub struct DeleteUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    user_repository: &'a R,
}

impl<'a, R> DeleteUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    /// Fails with `UserNotFound` when the id is absent; the repository
    /// delete itself is idempotent.
    #[tracing::instrument(name = "DeleteUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<(), DeleteUserError> {
        let id = UserId::new(user_id)?;

        if self.user_repository.find_by_id(id).await?.is_none() {
            return Err(DeleteUserError::UserNotFound(user_id));
        }

        self.user_repository.delete(id).await?;
        Ok(())
    }
}
