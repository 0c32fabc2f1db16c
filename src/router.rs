use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

use crate::backend::LanguageBackend;
use crate::logging::logging_middleware;
use crate::resource;

/// Build the application router over a shared store
pub fn build_router(backend: Arc<dyn LanguageBackend>) -> Router {
    Router::new()
        .route("/", get(resource::greeting::greeting))
        .route("/languages/search", get(resource::language::search_languages))
        .route("/languages/{id}", get(resource::language::get_language))
        .fallback(not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(backend)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::database::sqlite::SqliteBackend;
    use crate::backend::database::DatabaseBackendConfig;
    use crate::backend::Backend;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn app() -> Router {
        let backend = SqliteBackend::connect(&DatabaseBackendConfig::memory_sqlite())
            .await
            .unwrap();
        backend.init_schema().await.unwrap();
        build_router(Arc::new(backend))
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/frameworks").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_route_wins_over_id_route() {
        // Without a filter this is a rejected search, not a lookup of id "search"
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/languages/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
