use userhub_core::{
    Email, User, UserRepository, UserRepositoryError, ValidationError, password,
};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Deliberately identical for unknown email and wrong password, so the
    /// response cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Login use case - verifies credentials and returns the entity.
///
/// Token issuance is not done here; the HTTP layer asks the token subsystem
/// for an access token after a successful login.
pub struct LoginUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    user_repository: &'a R,
}

impl<'a, R> LoginUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "LoginUserUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let email = Email::parse(email)?;

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        if !password::verify_password(password, user.password_hash()) {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(user)
    }
}
