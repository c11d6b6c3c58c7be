use chrono::Utc;
use userhub_core::{
    Email, PasswordHashError, User, UserId, UserName, UserRepository, UserRepositoryError,
    ValidationError, password,
};

/// Error types specific to the update user use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User with ID {0} not found")]
    UserNotFound(i64),
    #[error("Email {0} is already taken")]
    EmailTaken(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Update user use case - each field is independently updatable.
pub struct UpdateUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    user_repository: &'a R,
}

impl<'a, R> UpdateUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    /// Execute the update user use case
    ///
    /// `updated_at` is refreshed on every update, whether or not any field
    /// was provided. The email ownership check and the save are not atomic.
    #[tracing::instrument(name = "UpdateUserUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        user_id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, UpdateUserError> {
        let id = UserId::new(user_id)?;
        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(UpdateUserError::UserNotFound(user_id))?;

        if let Some(name) = name {
            user.set_name(UserName::parse(name)?);
        }

        if let Some(email) = email {
            let email = Email::parse(email)?;
            if let Some(existing) = self.user_repository.find_by_email(&email).await? {
                if existing.id() != id {
                    return Err(UpdateUserError::EmailTaken(email.as_str().to_string()));
                }
            }
            user.set_email(email);
        }

        if let Some(password) = password {
            user.set_password_hash(password::hash_password(password)?);
        }

        user.set_updated_at(Utc::now());

        Ok(self.user_repository.save(user).await?)
    }
}
