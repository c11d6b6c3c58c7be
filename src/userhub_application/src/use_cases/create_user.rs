use chrono::Utc;
use userhub_core::{
    Email, EventPublisher, PasswordHashError, User, UserCreatedEvent, UserId, UserName,
    UserRepository, UserRepositoryError, ValidationError, password,
};

/// Error types specific to the create user use case
#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("User with email {0} already exists")]
    UserAlreadyExists(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Create user use case - registers a new user and emits `user.created`.
pub struct CreateUserUseCase<'a, R, P>
where
    R: UserRepository + ?Sized,
    P: EventPublisher + ?Sized,
{
    user_repository: &'a R,
    event_publisher: &'a P,
}

impl<'a, R, P> CreateUserUseCase<'a, R, P>
where
    R: UserRepository + ?Sized,
    P: EventPublisher + ?Sized,
{
    pub fn new(user_repository: &'a R, event_publisher: &'a P) -> Self {
        Self {
            user_repository,
            event_publisher,
        }
    }

    /// Execute the create user use case
    ///
    /// Fails with `UserAlreadyExists` when another user owns the email. The
    /// duplicate check and the save are not atomic; uniqueness under
    /// concurrent creation depends on the backing store.
    ///
    /// A publish failure after a successful save is logged and swallowed -
    /// there is no compensating rollback.
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, CreateUserError> {
        let email = Email::parse(email)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(CreateUserError::UserAlreadyExists(
                email.as_str().to_string(),
            ));
        }

        let id = UserId::new(self.user_repository.next_id().await?)?;
        let name = UserName::parse(name)?;
        let password_hash = password::hash_password(password)?;

        let now = Utc::now();
        let user = User::new(id, name, email, password_hash, None, Some(now), Some(now));

        let saved = self.user_repository.save(user).await?;

        let event = UserCreatedEvent::new(saved.clone(), Utc::now());
        if let Err(e) = self
            .event_publisher
            .publish(UserCreatedEvent::EVENT_TYPE, event.to_payload())
            .await
        {
            tracing::warn!(error = %e, user_id = %saved.id(), "failed to publish user.created");
        }

        Ok(saved)
    }
}
