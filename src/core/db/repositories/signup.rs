//! Signup repository for database operations
//!
//! Inserts rely on the `signups_email_key` unique constraint to detect
//! duplicates; nothing is checked beforehand.

use sqlx::PgPool;

use crate::core::db::models::{SIGNUPS_EMAIL_CONSTRAINT, Signup};
use crate::core::signup::{SignupError, SignupRequest, SignupStore};

/// Signup repository error types
#[derive(Debug, thiserror::Error)]
pub enum SignupRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<SignupRepositoryError> for SignupError {
    fn from(err: SignupRepositoryError) -> Self {
        match err {
            SignupRepositoryError::EmailAlreadyExists => SignupError::UniqueViolation,
            SignupRepositoryError::DatabaseError(sqlx::Error::Database(db_err)) => {
                SignupError::from_code(db_err.code().as_deref(), db_err.message())
            }
            SignupRepositoryError::DatabaseError(e) => SignupError::Unknown(e.to_string()),
        }
    }
}

/// Signup repository for database operations
#[derive(Clone)]
pub struct SignupRepository {
    pool: PgPool,
}

impl SignupRepository {
    /// Create a new signup repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a signup
    pub async fn create(
        &self,
        email: &str,
        platform: &str,
    ) -> Result<Signup, SignupRepositoryError> {
        let signup = sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO signups (email, platform)
            VALUES ($1, $2)
            RETURNING id, email, platform, created_at
            "#,
        )
        .bind(email)
        .bind(platform)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.is_unique_violation()
                    || db_err.constraint() == Some(SIGNUPS_EMAIL_CONSTRAINT) =>
            {
                SignupRepositoryError::EmailAlreadyExists
            }
            _ => SignupRepositoryError::from(e),
        })?;

        Ok(signup)
    }

    /// Find a signup by email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Signup>, SignupRepositoryError> {
        let signup = sqlx::query_as::<_, Signup>(
            r#"
            SELECT id, email, platform, created_at
            FROM signups
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(signup)
    }

    /// Total number of signups
    pub async fn count(&self) -> Result<i64, SignupRepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signups")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl SignupStore for SignupRepository {
    async fn insert_signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
        self.create(&request.email, &request.platform)
            .await
            .map(|_| ())
            .map_err(SignupError::from)
    }
}
