//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced by handlers
#[derive(Debug)]
pub enum ApiError {
    /// Malformed query or form value
    BadRequest(String),
    NotFound(String),
    /// A handler needing the language context ran outside the provider layer
    MissingLanguageProvider,
    Internal(String),
}

impl From<folio_common::Error> for ApiError {
    fn from(e: folio_common::Error) -> Self {
        match e {
            folio_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            folio_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Not found: {}", msg)),
            ApiError::MissingLanguageProvider => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "language context must be used within a LanguageProvider".to_string(),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
