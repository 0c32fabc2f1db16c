use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Language;

/// Language data ready for database insertion
#[derive(Debug, Clone)]
pub struct PreparedLanguageData {
    pub language: Language,
    pub id: String,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

/// Database-specific adapter for language INSERT operations
#[async_trait]
pub trait LanguageInserter: Send + Sync {
    /// Execute the insert and return the stored language
    async fn execute_language_insert(&self, data: PreparedLanguageData) -> AppResult<Language>;
}

/// Shared logic for language INSERT operations
pub struct LanguageInsertProcessor;

impl LanguageInsertProcessor {
    /// Prepare a language for insertion
    ///
    /// A blank ID is replaced by a generated one. The stored document is the
    /// record's wire form, so filters address the same field names clients see.
    pub fn prepare_language_for_insert(language: &Language) -> AppResult<PreparedLanguageData> {
        let mut language = language.clone();

        if language.id.trim().is_empty() {
            language.id = Uuid::new_v4().to_string();
        }

        if language.language.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Language name cannot be empty".to_string(),
            ));
        }

        let data = serde_json::to_value(&language).map_err(AppError::Serialization)?;

        Ok(PreparedLanguageData {
            id: language.id.clone(),
            language,
            data,
            timestamp: Utc::now(),
        })
    }
}

/// Unified language INSERT operations using the adapter pattern
pub struct UnifiedLanguageInsertOps<T: LanguageInserter> {
    inserter: T,
}

impl<T: LanguageInserter> UnifiedLanguageInsertOps<T> {
    pub fn new(inserter: T) -> Self {
        Self { inserter }
    }

    /// Create a new language using shared logic and database-specific execution
    pub async fn create_language(&self, language: &Language) -> AppResult<Language> {
        let prepared_data = LanguageInsertProcessor::prepare_language_for_insert(language)?;

        self.inserter.execute_language_insert(prepared_data).await
    }
}

/// Map insert failures, turning key collisions into client errors
pub fn map_insert_error(error: sqlx::Error) -> AppError {
    let error_str = error.to_string();
    if error_str.contains("duplicate key") || error_str.contains("UNIQUE constraint") {
        AppError::BadRequest("Language already exists".to_string())
    } else {
        AppError::Database(format!("Failed to create language: {}", error_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prepare_keeps_given_id() {
        let java = Language::new("1", "Java", 8, true);
        let prepared = LanguageInsertProcessor::prepare_language_for_insert(&java).unwrap();

        assert_eq!(prepared.id, "1");
        assert_eq!(
            prepared.data,
            json!({"id": "1", "language": "Java", "version": 8, "jvmBased": true})
        );
    }

    #[test]
    fn test_prepare_generates_missing_id() {
        let rust = Language::new("", "Rust", 1, false);
        let prepared = LanguageInsertProcessor::prepare_language_for_insert(&rust).unwrap();

        assert!(Uuid::parse_str(&prepared.id).is_ok());
        assert_eq!(prepared.language.id, prepared.id);
        assert_eq!(prepared.data["id"], json!(prepared.id));
    }

    #[test]
    fn test_prepare_rejects_blank_name() {
        let blank = Language::new("1", " ", 1, false);
        let result = LanguageInsertProcessor::prepare_language_for_insert(&blank);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
