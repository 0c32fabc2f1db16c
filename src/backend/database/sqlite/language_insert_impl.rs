use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::language_insert::{map_insert_error, LanguageInserter, PreparedLanguageData};
use crate::backend::database::LANGUAGES_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::Language;

/// SQLite-specific implementation of LanguageInserter
///
/// Documents are stored as JSON TEXT.
pub struct SqliteLanguageInserter {
    pool: SqlitePool,
}

impl SqliteLanguageInserter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageInserter for SqliteLanguageInserter {
    async fn execute_language_insert(&self, data: PreparedLanguageData) -> AppResult<Language> {
        let sql = format!(
            "INSERT INTO {} (id, data, created_at) VALUES (?1, ?2, ?3)",
            LANGUAGES_TABLE
        );

        let data_str = serde_json::to_string(&data.data).map_err(AppError::Serialization)?;

        sqlx::query(&sql)
            .bind(&data.id)
            .bind(&data_str)
            .bind(data.timestamp)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(data.language)
    }
}
