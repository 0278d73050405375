//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Every variant renders as a JSON body of the form `{"error": "..."}` so
/// clients never have to branch on content type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested record or file does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Request is malformed or missing required fields.
    #[error("{0}")]
    BadRequest(String),

    /// An upstream call failed on our behalf.
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
