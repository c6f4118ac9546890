//! Store connection management

use std::sync::Arc;
use std::time::Duration;
use sqlx::{Pool, Postgres};
use tracing::info;
use crate::config::{Settings, StorageBackend};
use crate::database::backends::{FileStore, MemoryStore, PostgresStore, RedisStore};
use crate::database::store::SharedStore;
use crate::utils::errors::PortalError;

pub type DatabasePool = Pool<Postgres>;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/event_portal".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl From<&crate::config::DatabaseConfig> for DatabaseConfig {
    fn from(settings: &crate::config::DatabaseConfig) -> Self {
        Self {
            url: settings.url.clone(),
            max_connections: settings.max_connections,
            min_connections: settings.min_connections,
            ..Self::default()
        }
    }
}

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, PortalError> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;

    // Test the connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), PortalError> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Open the record store selected in the settings
///
/// For the postgres backend this also runs the migrations creating the
/// `collections` table.
pub async fn create_store(settings: &Settings) -> Result<SharedStore, PortalError> {
    let prefix = settings.storage.key_prefix.as_str();
    info!(backend = %settings.storage.backend, "Opening record store");

    let store: SharedStore = match settings.storage.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::new(&settings.file.data_dir, prefix)),
        StorageBackend::Redis => Arc::new(RedisStore::new(&settings.redis, prefix).await?),
        StorageBackend::Postgres => {
            let pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;
            run_migrations(&pool).await?;
            Arc::new(PostgresStore::new(pool, prefix))
        }
    };

    Ok(store)
}

/// Check store health
pub async fn health_check(store: &SharedStore) -> Result<(), PortalError> {
    store.ping().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert!(config.url.contains("postgresql://"));
    }

    #[tokio::test]
    async fn test_create_memory_store() {
        let store = create_store(&Settings::default()).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert!(health_check(&store).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.storage.backend = StorageBackend::File;
        settings.file.data_dir = dir.path().display().to_string();

        let store = create_store(&settings).await.unwrap();
        assert_eq!(store.backend_name(), "file");
        assert!(health_check(&store).await.is_ok());
    }
}
