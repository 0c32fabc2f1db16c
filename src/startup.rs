use std::sync::Arc;

use crate::backend::{BackendFactory, LanguageBackend};
use crate::config::AppConfig;
use crate::error::AppResult;

/// Connect to the configured store and make it ready to serve.
///
/// Creates the document table, checks the connection and loads the seed
/// catalog when the store holds no records yet.
pub async fn setup_backend(config: &AppConfig) -> AppResult<Arc<dyn LanguageBackend>> {
    let backend_config = config.database_backend_config()?;

    tracing::info!(
        "Setting up {} backend ({})",
        config.database.db_type,
        config.database.url
    );

    let backend = BackendFactory::create(&backend_config).await?;
    backend.init_schema().await?;
    backend.health_check().await?;

    let seeded = seed_catalog(backend.as_ref(), config).await?;
    if seeded > 0 {
        tracing::info!("Seeded catalog with {} language(s)", seeded);
    }

    Ok(backend)
}

/// Insert the configured seed records into an empty store.
///
/// Returns the number of records inserted; a store that already holds data
/// is left untouched.
pub async fn seed_catalog(backend: &dyn LanguageBackend, config: &AppConfig) -> AppResult<usize> {
    if config.catalog.seed.is_empty() || backend.count_languages().await? > 0 {
        return Ok(0);
    }

    for seed in &config.catalog.seed {
        let language = backend.create_language(&seed.to_language()).await?;
        tracing::debug!(
            "Seeded language {} ({} {})",
            language.id,
            language.language,
            language.version
        );
    }

    Ok(config.catalog.seed.len())
}
