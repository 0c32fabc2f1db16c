use crate::backend::database::LANGUAGES_TABLE;
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Initialize the language document table for SQLite
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let languages_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            data TEXT NOT NULL CHECK (json_valid(data)),
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
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
