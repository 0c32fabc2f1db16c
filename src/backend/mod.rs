use crate::error::AppResult;
use crate::filter::Predicate;
use crate::models::Language;
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

/// Supported database backend types
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

/// Core backend abstraction
///
/// Connection handling and schema setup shared by every document store.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect to the storage backend
    async fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the document table if it does not exist yet
    async fn init_schema(&self) -> AppResult<()>;
}

/// Language catalog operations
#[async_trait]
pub trait LanguageBackend: Backend {
    /// Store a new language record
    async fn create_language(&self, language: &Language) -> AppResult<Language>;

    /// Find a language by ID
    async fn find_language_by_id(&self, id: &str) -> AppResult<Option<Language>>;

    /// Find every language matching all criteria of `predicate`.
    ///
    /// An empty predicate matches the whole catalog.
    async fn find_languages(&self, predicate: &Predicate) -> AppResult<Vec<Language>>;

    /// Number of stored records
    async fn count_languages(&self) -> AppResult<i64>;
}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn LanguageBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn LanguageBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
