use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use crate::backend::database::{
    PostgresLanguageInserter, PostgresLanguageReader, UnifiedLanguageInsertOps,
    UnifiedLanguageReadOps,
};
use crate::backend::{Backend, LanguageBackend};
use crate::error::{AppError, AppResult};
use crate::filter::Predicate;
use crate::models::Language;

/// PostgreSQL database backend implementation
///
/// Stores each language as a JSONB document.
pub struct PostgresBackend {
    pool: PgPool,
    language_insert_ops: UnifiedLanguageInsertOps<PostgresLanguageInserter>,
    language_read_ops: UnifiedLanguageReadOps<PostgresLanguageReader>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool) -> Self {
        let language_inserter = PostgresLanguageInserter::new(pool.clone());
        let language_reader = PostgresLanguageReader::new(pool.clone());

        Self {
            pool,
            language_insert_ops: UnifiedLanguageInsertOps::new(language_inserter),
            language_read_ops: UnifiedLanguageReadOps::new(language_reader),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        // Validate configuration
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

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
impl LanguageBackend for PostgresBackend {
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
