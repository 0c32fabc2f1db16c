use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use url::form_urlencoded;

use crate::backend::LanguageBackend;
use crate::error::{AppError, AppResult};
use crate::filter::{decode_filter_param, Filter, Predicate, QueryBuilder};
use crate::models::Language;

type AppState = Arc<dyn LanguageBackend>;

pub async fn get_language(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Language>, (StatusCode, Json<serde_json::Value>)> {
    match backend.find_language_by_id(&id).await {
        Ok(Some(language)) => Ok(Json(language)),
        Ok(None) => Err(AppError::NotFound(format!(
            "Could not find language with ID #{}",
            id
        ))
        .to_response()),
        Err(e) => Err(e.to_response()),
    }
}

pub async fn search_languages(
    State(backend): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Language>>, (StatusCode, Json<serde_json::Value>)> {
    let params = filter_params(query.as_deref());

    let predicate = build_predicate(&params).map_err(|e| {
        tracing::debug!("Rejected search {:?}: {}", params, e);
        e.to_response()
    })?;

    backend
        .find_languages(&predicate)
        .await
        .map(Json)
        .map_err(|e| e.to_response())
}

/// Every `filter` value of a query string, in order
fn filter_params(query: Option<&str>) -> Vec<String> {
    query
        .map(|query| {
            form_urlencoded::parse(query.as_bytes())
                .filter(|(key, _)| key == "filter")
                .map(|(_, value)| value.into_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// Decode and validate `filter` parameters into one conjunctive predicate.
///
/// Each parameter holds one filter object or an array of them; filters
/// from all parameters are combined, so an attribute may appear only once
/// across the whole request.
pub fn build_predicate(params: &[String]) -> AppResult<Predicate> {
    let mut filters = Vec::new();

    for param in params {
        let raw_filters = decode_filter_param(param)
            .map_err(|e| AppError::BadRequest(format!("Cannot parse parameters: {}", e)))?;

        for raw in raw_filters {
            filters.push(Filter::try_from(raw)?);
        }
    }

    if filters.is_empty() {
        return Err(AppError::BadRequest(
            "Required request parameter 'filter' is not present".to_string(),
        ));
    }

    Ok(QueryBuilder::build(&filters)?)
}
