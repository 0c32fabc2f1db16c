use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use crate::backend::database::{
    SqliteLanguageInserter, SqliteLanguageReader, UnifiedLanguageInsertOps, UnifiedLanguageReadOps,
};
use crate::backend::{Backend, LanguageBackend};
use crate::error::{AppError, AppResult};
use crate::filter::Predicate;
use crate::models::Language;

/// SQLite database backend implementation
///
/// Documents live in a TEXT column and are queried through JSON1.
pub struct SqliteBackend {
    pool: SqlitePool,
    language_insert_ops: UnifiedLanguageInsertOps<SqliteLanguageInserter>,
    language_read_ops: UnifiedLanguageReadOps<SqliteLanguageReader>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool) -> Self {
        let language_inserter = SqliteLanguageInserter::new(pool.clone());
        let language_reader = SqliteLanguageReader::new(pool.clone());

        Self {
            pool,
            language_insert_ops: UnifiedLanguageInsertOps::new(language_inserter),
            language_read_ops: UnifiedLanguageReadOps::new(language_reader),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Turn a configured location into a URL sqlx understands
    fn connection_url(config: &DatabaseBackendConfig) -> String {
        if config.is_memory_database() {
            "sqlite::memory:".to_string()
        } else if config.connection_url.starts_with("sqlite:") {
            config.connection_url.clone()
        } else {
            format!("sqlite:{}", config.connection_url)
        }
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let options = SqliteConnectOptions::from_str(&Self::connection_url(config))
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        // Every connection to :memory: opens a fresh database, so keep exactly
        // one connection alive for the life of the pool.
        if config.is_memory_database() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        Ok(Self::new(pool))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }
}

#[async_trait]
impl LanguageBackend for SqliteBackend {
    async fn create_language(&self, language: &Language) -> AppResult<Language> {
        self.language_insert_ops.create_language(language).await
    }

    async fn find_language_by_id(&self, id: &str) -> AppResult<Option<Language>> {
        self.language_read_ops.find_language_by_id(id).await
    }

    async fn find_languages(&self, predicate: &Predicate) -> AppResult<Vec<Language>> {
        self.language_read_ops.find_languages(predicate).await
    }

    async fn count_languages(&self) -> AppResult<i64> {
        self.language_read_ops.count_languages().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_url() {
        let memory = DatabaseBackendConfig::memory_sqlite();
        assert_eq!(SqliteBackend::connection_url(&memory), "sqlite::memory:");

        let file = DatabaseBackendConfig::sqlite("languages.db".to_string());
        assert_eq!(SqliteBackend::connection_url(&file), "sqlite:languages.db");

        let url = DatabaseBackendConfig::sqlite("sqlite:./data/languages.db".to_string());
        assert_eq!(SqliteBackend::connection_url(&url), "sqlite:./data/languages.db");
    }

    #[tokio::test]
    async fn test_invalid_config_is_a_configuration_error() {
        let config = DatabaseBackendConfig::memory_sqlite().with_max_connections(0);
        let result = SqliteBackend::connect(&config).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));

        let config = DatabaseBackendConfig::sqlite("languages.txt".to_string());
        let result = SqliteBackend::connect(&config).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_memory_backend_lifecycle() {
        let backend = SqliteBackend::connect(&DatabaseBackendConfig::memory_sqlite())
            .await
            .unwrap();

        backend.health_check().await.unwrap();
        backend.init_schema().await.unwrap();
        // Initialization is idempotent
        backend.init_schema().await.unwrap();

        assert_eq!(backend.count_languages().await.unwrap(), 0);

        let created = backend
            .create_language(&Language::new("", "Rust", 1, false))
            .await
            .unwrap();
        assert!(!created.id.is_empty());

        let found = backend.find_language_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(backend.count_languages().await.unwrap(), 1);
    }
}
