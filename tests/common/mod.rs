#![allow(dead_code)]

use axum::Router;
use language_search::backend::database::DatabaseBackendConfig;
use language_search::backend::{BackendFactory, LanguageBackend};
use language_search::models::Language;
use serde_json::Value;
use std::sync::Arc;
use url::form_urlencoded;

/// Records every search test starts from
pub fn sample_languages() -> Vec<Language> {
    vec![
        Language::new("1", "Java", 6, true),
        Language::new("2", "Java", 7, true),
        Language::new("3", "Java", 8, true),
        Language::new("4", "Python", 3, false),
        Language::new("5", "Kotlin", 1, true),
        Language::new("6", "Rust", 1, false),
    ]
}

/// Create backend for testing with in-memory SQLite database
pub async fn setup_test_database() -> Result<Arc<dyn LanguageBackend>, Box<dyn std::error::Error>> {
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite()).await?;
    backend.init_schema().await?;
    Ok(backend)
}

/// Insert the sample catalog into `backend`
pub async fn seed(backend: &dyn LanguageBackend) -> Result<(), Box<dyn std::error::Error>> {
    for language in sample_languages() {
        backend.create_language(&language).await?;
    }
    Ok(())
}

/// Router over a seeded in-memory store
pub async fn setup_test_app() -> Result<Router, Box<dyn std::error::Error>> {
    let backend = setup_test_database().await?;
    seed(backend.as_ref()).await?;
    Ok(language_search::build_router(backend))
}

/// Search URL carrying each filter as its own `filter` parameter
pub fn search_path(filters: &[Value]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for filter in filters {
        serializer.append_pair("filter", &filter.to_string());
    }
    format!("/languages/search?{}", serializer.finish())
}

/// IDs of the records in a search response body
pub fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .map(|records| {
            records
                .iter()
                .filter_map(|record| record["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
