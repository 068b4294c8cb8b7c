//! Storage backend selection for the waitlist API

use crate::core::config::Config;
use crate::core::db::models::Signup;
use crate::core::db::{DbConfig, DbError, SignupRepository, create_pool_with_migrations, health_check};
use crate::core::signup::{SignupError, SignupRequest, SignupStore};
use crate::core::waitlist::memory::MemorySignupStore;

/// Where signups are written
#[derive(Clone)]
pub enum WaitlistStorage {
    Postgres(SignupRepository),
    Memory(MemorySignupStore),
}

impl WaitlistStorage {
    /// Connect to PostgreSQL when configured, otherwise keep signups in memory
    pub async fn connect(config: &Config) -> Result<Self, DbError> {
        if !config.has_database() {
            tracing::warn!("DATABASE_URL not set, signups will be kept in memory only");
            return Ok(WaitlistStorage::Memory(MemorySignupStore::new()));
        }

        let db_config = DbConfig::from_config(config)?;
        let pool = create_pool_with_migrations(&db_config).await?;
        tracing::info!(
            "Connected to {} (max_connections={})",
            db_config.redacted_url(),
            db_config.max_connections
        );

        Ok(WaitlistStorage::Postgres(SignupRepository::new(pool)))
    }

    /// Short backend name for logs and the health endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            WaitlistStorage::Postgres(_) => "postgres",
            WaitlistStorage::Memory(_) => "memory",
        }
    }

    pub async fn insert(&self, email: &str, platform: &str) -> Result<Signup, SignupError> {
        match self {
            WaitlistStorage::Postgres(repo) => {
                repo.create(email, platform).await.map_err(SignupError::from)
            }
            WaitlistStorage::Memory(store) => store.create(email, platform),
        }
    }

    pub async fn health(&self) -> Result<(), DbError> {
        match self {
            WaitlistStorage::Postgres(repo) => health_check(repo.pool()).await,
            WaitlistStorage::Memory(_) => Ok(()),
        }
    }
}

impl SignupStore for WaitlistStorage {
    async fn insert_signup(&self, request: &SignupRequest) -> Result<(), SignupError> {
        self.insert(&request.email, &request.platform)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_without_database_uses_memory() {
        let config = Config {
            database_url: None,
            db_max_connections: 10,
            default_platform: "Slack".to_string(),
        };

        let storage = WaitlistStorage::connect(&config).await.unwrap();
        assert_eq!(storage.kind(), "memory");
        assert!(storage.health().await.is_ok());
    }

    #[tokio::test]
    async fn test_memory_insert_through_store_trait() {
        let storage = WaitlistStorage::Memory(MemorySignupStore::new());
        let request = SignupRequest::new("a@b.com", "Slack");

        assert!(storage.insert_signup(&request).await.is_ok());
        assert_eq!(
            storage.insert_signup(&request).await,
            Err(SignupError::UniqueViolation)
        );
    }
}
