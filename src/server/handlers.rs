//! Request handlers.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::constants::{SERVICE_TITLE, VERSION};
use crate::engine::RecommendationEngine;
use crate::models::{RecommendationRequest, RecommendationResponse};
use crate::server::error::ApiError;

/// GET /
///
/// Service description and endpoint listing.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": SERVICE_TITLE,
        "version": VERSION,
        "endpoints": {
            "/recommend": "POST - Get agent recommendations",
            "/agents": "GET - Get all agent information",
        }
    }))
}

/// GET /agents
///
/// The full catalog, untruncated, in definition order.
pub async fn list_agents(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    Json(engine.catalog()).into_response()
}

/// POST /recommend
///
/// Rank agents for a task description.
pub async fn recommend(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let response = engine.recommend(&request)?;

    tracing::info!(
        complexity = %response.task_analysis.complexity,
        project_type = %response.task_analysis.project_type,
        workflow = %response.task_analysis.workflow,
        experience_level = %response.task_analysis.experience_level,
        top = response.recommendations.first().map(|r| r.name.as_str()).unwrap_or("-"),
        "recommendation served"
    );

    Ok(Json(response))
}
