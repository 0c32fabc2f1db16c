use async_trait::async_trait;
use sqlx::PgPool;

use super::super::language_insert::{map_insert_error, LanguageInserter, PreparedLanguageData};
use crate::backend::database::LANGUAGES_TABLE;
use crate::error::AppResult;
use crate::models::Language;

/// PostgreSQL-specific implementation of LanguageInserter
pub struct PostgresLanguageInserter {
    pool: PgPool,
}

impl PostgresLanguageInserter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageInserter for PostgresLanguageInserter {
    async fn execute_language_insert(&self, data: PreparedLanguageData) -> AppResult<Language> {
        let sql = format!(
            "INSERT INTO {} (id, data, created_at) VALUES ($1, $2, $3)",
            LANGUAGES_TABLE
        );

        sqlx::query(&sql)
            .bind(&data.id)
            .bind(&data.data) // PostgreSQL: JSON as JSONB
            .bind(data.timestamp)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(data.language)
    }
}
