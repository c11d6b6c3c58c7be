use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use userhub_core::{Email, User, UserId, UserName, UserRepository, UserRepositoryError};

/// Postgres-backed user repository.
///
/// The `users` table carries a unique index on email; a violation that slips
/// past the use-case check surfaces as `UserRepositoryError::Conflict`.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserRepository { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    email_verified_at: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = UserRepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id)
            .map_err(|e| UserRepositoryError::Unexpected(e.to_string()))?;
        let name = UserName::parse(row.name)
            .map_err(|e| UserRepositoryError::Unexpected(e.to_string()))?;
        let email = Email::parse(row.email)
            .map_err(|e| UserRepositoryError::Unexpected(e.to_string()))?;

        Ok(User::new(
            id,
            name,
            email,
            row.password_hash,
            row.email_verified_at,
            row.created_at,
            row.updated_at,
        ))
    }
}

fn map_sqlx_error(e: sqlx::Error) -> UserRepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.constraint().is_some() {
            return UserRepositoryError::Conflict(db_err.to_string());
        }
    }
    UserRepositoryError::Unexpected(e.to_string())
}

const SELECT_USER: &str = r#"
    SELECT id, name, email, password_hash, email_verified_at, created_at, updated_at
    FROM users
"#;

/// Row offset for a 1-indexed page. `None` when the product exceeds `i64`,
/// which can happen with maximal query parameters; such a page is
/// necessarily past the end of the table.
fn page_offset(page: u32, per_page: u32) -> Option<i64> {
    i64::from(page.max(1) - 1).checked_mul(i64::from(per_page))
}

#[async_trait::async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(name = "Finding user by id in PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Finding user by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Listing users from PostgreSQL", skip(self))]
    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<User>, UserRepositoryError> {
        let Some(offset) = page_offset(page, per_page) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} ORDER BY id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    #[tracing::instrument(name = "Upserting user into PostgreSQL", skip_all)]
    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (id, name, email, password_hash, email_verified_at, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO UPDATE SET
                    name = EXCLUDED.name,
                    email = EXCLUDED.email,
                    password_hash = EXCLUDED.password_hash,
                    email_verified_at = EXCLUDED.email_verified_at,
                    updated_at = EXCLUDED.updated_at
                RETURNING id, name, email, password_hash, email_verified_at, created_at, updated_at
            "#,
        )
        .bind(user.id().value())
        .bind(user.name().as_str())
        .bind(user.email().as_str())
        .bind(user.password_hash())
        .bind(user.email_verified_at())
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        User::try_from(row)
    }

    #[tracing::instrument(name = "Deleting user from PostgreSQL", skip(self))]
    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        // Deleting an absent id affects zero rows, which is fine.
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Allocating next user id in PostgreSQL", skip_all)]
    async fn next_id(&self) -> Result<i64, UserRepositoryError> {
        // max(id)+1, mirroring the original allocation scheme. Not safe
        // under concurrent creation.
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(id), 0) + 1 FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}
