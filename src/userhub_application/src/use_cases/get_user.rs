use userhub_core::{User, UserId, UserRepository, UserRepositoryError, ValidationError};

/// Error types specific to the get user use case
#[derive(Debug, thiserror::Error)]
pub enum GetUserError {
    #[error("User with ID {0} not found")]
    UserNotFound(i64),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Get user use case - single entity lookup by id.
pub struct GetUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    user_repository: &'a R,
}

impl<'a, R> GetUserUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "GetUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<User, GetUserError> {
        let id = UserId::new(user_id)?;
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(GetUserError::UserNotFound(user_id))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use chrono::Utc;
    use tokio::sync::RwLock;
    use userhub_core::{Email, User, UserName};

    use super::*;

    #[derive(Default, Clone)]
    struct MockUserRepository {
        users: Arc<RwLock<HashMap<i64, User>>>,
    }

    #[async_trait::async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
            Ok(self.users.read().await.get(&id.value()).cloned())
        }

        async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserRepositoryError> {
            unimplemented!()
        }

        async fn find_all(
            &self,
            _page: u32,
            _per_page: u32,
        ) -> Result<Vec<User>, UserRepositoryError> {
            unimplemented!()
        }

        async fn save(&self, _user: User) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: UserId) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn next_id(&self) -> Result<i64, UserRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_get_existing_user() {
        let repository = MockUserRepository::default();
        let user = User::new(
            UserId::new(1).unwrap(),
            UserName::parse("John Doe").unwrap(),
            Email::parse("john@x.com").unwrap(),
            "hash".to_string(),
            None,
            Some(Utc::now()),
            Some(Utc::now()),
        );
        repository.users.write().await.insert(1, user.clone());
        let use_case = GetUserUseCase::new(&repository);

        let found = use_case.execute(1).await.unwrap();

        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn test_get_unknown_user_fails_not_found() {
        let repository = MockUserRepository::default();
        let use_case = GetUserUseCase::new(&repository);

        let result = use_case.execute(42).await;

        assert!(matches!(result, Err(GetUserError::UserNotFound(42))));
    }

    #[tokio::test]
    async fn test_non_positive_id_fails_validation() {
        let repository = MockUserRepository::default();
        let use_case = GetUserUseCase::new(&repository);

        let result = use_case.execute(0).await;

        assert!(matches!(
            result,
            Err(GetUserError::Validation(ValidationError::NonPositiveUserId))
        ));
    }
}
