use userhub_core::{BannedTokenStore, BannedTokenStoreError};

/// Error types specific to the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error(transparent)]
    BannedTokenStore(#[from] BannedTokenStoreError),
}

/// Logout use case - revokes the presented access token.
pub struct LogoutUseCase<'a, B>
where
    B: BannedTokenStore + ?Sized,
{
    banned_token_store: &'a B,
}

impl<'a, B> LogoutUseCase<'a, B>
where
    B: BannedTokenStore + ?Sized,
{
    pub fn new(banned_token_store: &'a B) -> Self {
        Self { banned_token_store }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: String) -> Result<(), LogoutError> {
        self.banned_token_store.ban_token(token).await?;
        Ok(())
    }
}
