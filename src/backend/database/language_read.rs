//! Language read operations
//!
//! Common interfaces for read operations that work across different
//! database backends.

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::filter::Predicate;
use crate::models::Language;

/// Trait for language read operations
#[async_trait]
pub trait LanguageReader: Send + Sync {
    /// Find a language by ID
    async fn find_language_by_id(&self, id: &str) -> AppResult<Option<Language>>;

    /// Find languages matching a predicate, in insertion order
    async fn find_languages(&self, predicate: &Predicate) -> AppResult<Vec<Language>>;

    /// Count stored languages
    async fn count_languages(&self) -> AppResult<i64>;
}

/// Unified language read operations
pub struct UnifiedLanguageReadOps<T: LanguageReader> {
    reader: T,
}

impl<T: LanguageReader> UnifiedLanguageReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    pub async fn find_language_by_id(&self, id: &str) -> AppResult<Option<Language>> {
        self.reader.find_language_by_id(id).await
    }

    pub async fn find_languages(&self, predicate: &Predicate) -> AppResult<Vec<Language>> {
        tracing::debug!("Searching languages where {}", predicate);
        let languages = self.reader.find_languages(predicate).await?;
        tracing::debug!("Search matched {} language(s)", languages.len());
        Ok(languages)
    }

    pub async fn count_languages(&self) -> AppResult<i64> {
        self.reader.count_languages().await
    }
}

/// Rebuild a record from its stored document and key column
pub fn language_from_document(id: String, data: serde_json::Value) -> AppResult<Language> {
    let mut language: Language = serde_json::from_value(data).map_err(AppError::Serialization)?;
    language.id = id;
    Ok(language)
}
