//! Recommendation engine: analyze, score, justify, rank.
//!
//! The engine owns a shared, read-only [`Catalog`]; every call works on
//! request-local data only, so one engine can serve concurrent requests.

pub mod analyzer;
pub mod justifier;
pub mod scorer;

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::constants::{DEFAULT_TOP_N, MAX_STRENGTHS, MAX_TOOLS, MAX_USE_CASES};
use crate::models::{
    Recommendation, RecommendationRequest, RecommendationResponse, TaskAnalysis,
};

/// Errors raised while producing recommendations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
}

/// Ranks catalog agents for task descriptions.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    top_n: usize,
}

impl RecommendationEngine {
    /// Engine returning the default number of recommendations.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Override how many recommendations are returned.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Categorical analysis of a description.
    pub fn analyze(&self, description: &str) -> TaskAnalysis {
        analyzer::analyze_task(description)
    }

    /// Raw (unrounded) score of a named agent.
    pub fn score(
        &self,
        agent: &str,
        description: &str,
        analysis: &TaskAnalysis,
    ) -> Result<f64, EngineError> {
        let profile = self
            .catalog
            .get(agent)
            .ok_or_else(|| EngineError::UnknownAgent(agent.to_string()))?;
        Ok(scorer::score_agent(profile, description, analysis))
    }

    /// Rank every catalog agent for `request` and keep the best `top_n`.
    ///
    /// Scores are rounded to two decimals before the stable descending
    /// sort, so agents that round equal keep catalog order. The optional
    /// hints on the request are not consulted.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, EngineError> {
        let description = request.description.as_str();
        let analysis = self.analyze(description);

        let mut recommendations = Vec::with_capacity(self.catalog.len());
        for profile in self.catalog.iter() {
            let score = self.score(&profile.name, description, &analysis)?;
            let justification = justifier::justify(&profile.name, score, &analysis);
            tracing::debug!(agent = %profile.name, score, "scored agent");

            recommendations.push(Recommendation {
                name: profile.name.clone(),
                score: round2(score),
                justification,
                strengths: head(&profile.strengths, MAX_STRENGTHS),
                use_cases: head(&profile.use_cases, MAX_USE_CASES),
                pricing: profile.pricing.clone(),
                tools: head(&profile.tools, MAX_TOOLS),
            });
        }

        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(self.top_n);

        Ok(RecommendationResponse {
            recommendations,
            task_analysis: analysis,
        })
    }
}

/// Round to two decimals from the exact value of `score`.
///
/// `(score * 100.0).round()` would round the product, which for a stored
/// value like 0.9349999999999999 lands on 93.5 and rounds up.
fn round2(score: f64) -> f64 {
    format!("{score:.2}").parse().unwrap_or(score)
}

fn head(items: &[String], n: usize) -> Vec<String> {
    items.iter().take(n).cloned().collect()
}
