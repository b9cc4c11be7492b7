//! Request and response types for the recommendation endpoint.

use serde::{Deserialize, Serialize};

use crate::models::TaskAnalysis;

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Free-text task description.
    pub description: String,
    /// Caller-supplied complexity hint. Accepted but not used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    /// Caller-supplied project type hint. Accepted but not used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

impl RecommendationRequest {
    /// Request with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            complexity: None,
            project_type: None,
        }
    }
}

/// One ranked agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    /// Score in `[0, 1]`, rounded to two decimals.
    pub score: f64,
    pub justification: String,
    pub strengths: Vec<String>,
    pub use_cases: Vec<String>,
    pub pricing: String,
    pub tools: Vec<String>,
}

/// Body returned by `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    pub task_analysis: TaskAnalysis,
}
