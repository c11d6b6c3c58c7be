use userhub_core::{User, UserRepository, UserRepositoryError};

/// List users use case - paginated pass-through read.
///
/// Pages are 1-indexed. No total-count or has-more metadata is computed
/// here; callers build their own pagination metadata.
pub struct ListUsersUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    user_repository: &'a R,
}

impl<'a, R> ListUsersUseCase<'a, R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "ListUsersUseCase::execute", skip(self))]
    pub async fn execute(&self, page: u32, per_page: u32) -> Result<Vec<User>, UserRepositoryError> {
        self.user_repository.find_all(page, per_page).await
    }
}
