use axum::{http::StatusCode, Json};
use serde_json::json;
use std::fmt;

use crate::filter::FilterError;

#[derive(Debug)]
pub enum AppError {
    InvalidFilter(FilterError),
    BadRequest(String),
    NotFound(String),
    Database(String),
    Serialization(serde_json::Error),
    Configuration(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidFilter(e) => write!(f, "Invalid filter: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::NotFound(e) => write!(f, "Not found: {}", e),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::InvalidFilter(e) => Some(e),
            AppError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        AppError::InvalidFilter(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFilter(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Serialization(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert into the `(status, {"error": message})` pair handlers return
    pub fn to_response(&self) -> (StatusCode, Json<serde_json::Value>) {
        let status = self.status_code();
        let message = match self {
            AppError::InvalidFilter(e) => format!("Cannot parse parameters: {}", e),
            AppError::BadRequest(e) | AppError::NotFound(e) => e.clone(),
            other => {
                tracing::error!("{}", other);
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
