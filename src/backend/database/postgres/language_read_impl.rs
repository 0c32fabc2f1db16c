use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};

use super::super::filter::{FilterConverter, SqlParam};
use super::super::language_read::{language_from_document, LanguageReader};
use super::filter_impl::PostgresFilterConverter;
use crate::backend::database::LANGUAGES_TABLE;
use crate::error::{AppError, AppResult};
use crate::filter::Predicate;
use crate::models::Language;

/// PostgreSQL-specific implementation of LanguageReader
pub struct PostgresLanguageReader {
    pool: PgPool,
    filter_converter: PostgresFilterConverter,
}

impl PostgresLanguageReader {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            filter_converter: PostgresFilterConverter::new(),
        }
    }

    fn row_to_language(row: &sqlx::postgres::PgRow) -> AppResult<Language> {
        let id: String = row.get("id");
        let data: Value = row.get("data");
        language_from_document(id, data)
    }
}

#[async_trait]
impl LanguageReader for PostgresLanguageReader {
    async fn find_language_by_id(&self, id: &str) -> AppResult<Option<Language>> {
        let sql = format!("SELECT id, data FROM {} WHERE id = $1", LANGUAGES_TABLE);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find language: {}", e)))?;

        row.as_ref().map(Self::row_to_language).transpose()
    }

    async fn find_languages(&self, predicate: &Predicate) -> AppResult<Vec<Language>> {
        let (where_clause, params) = self.filter_converter.to_where_clause(predicate)?;
        let sql = format!(
            "SELECT id, data FROM {} WHERE {} ORDER BY created_at, id",
            LANGUAGES_TABLE, where_clause
        );

        let mut query = sqlx::query(&sql);
        for param in params {
            query = match param {
                SqlParam::Text(value) => query.bind(value),
                SqlParam::Integer(value) => query.bind(value),
                SqlParam::Boolean(value) => query.bind(value),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to search languages: {}", e)))?;

        Ok(rows
            .iter()
            .filter_map(|row| match Self::row_to_language(row) {
                Ok(language) => Some(language),
                Err(e) => {
                    tracing::warn!("Skipping unreadable language document: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn count_languages(&self) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", LANGUAGES_TABLE);

        sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to count languages: {}", e)))
    }
}
