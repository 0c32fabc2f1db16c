use crate::backend::database::LANGUAGES_TABLE;
use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Initialize the language document table for PostgreSQL
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let languages_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            data JSONB NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )
        "#,
        LANGUAGES_TABLE
    );

    sqlx::query(&languages_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create languages table: {}", e)))?;

    let index_sql = format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_created_at ON {0} (created_at)",
        LANGUAGES_TABLE
    );

    sqlx::query(&index_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create languages index: {}", e)))?;

    Ok(())
}
