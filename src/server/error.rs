//! HTTP error boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::engine::EngineError;

/// Errors surfaced by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The engine failed while ranking agents.
    #[error("Error generating recommendations: {0}")]
    Recommendation(#[from] EngineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Recommendation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("{self}");

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
