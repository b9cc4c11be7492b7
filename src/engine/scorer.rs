//! Per-agent scoring.
//!
//! A score starts at [`BASE_SCORE`], collects keyword-table and categorical
//! bonuses, and is clamped to at most 1.0. Every term is non-negative, so
//! the result always lies in `[BASE_SCORE, 1.0]`.

use crate::models::{AgentProfile, TaskAnalysis};

/// Starting score for every agent.
pub const BASE_SCORE: f64 = 0.5;

/// Multiplier applied to each matched keyword weight.
pub const KEYWORD_FACTOR: f64 = 0.3;

/// Bonus when the analysed complexity is one the agent handles.
pub const COMPLEXITY_BONUS: f64 = 0.2;

/// Bonus when the analysed project type is one the agent supports.
pub const PROJECT_TYPE_BONUS: f64 = 0.2;

/// Bonus per ideal-for tag found in the description.
pub const IDEAL_FOR_BONUS: f64 = 0.15;

/// Keyword → per-agent weight table, in evaluation order.
pub const KEYWORD_WEIGHTS: &[(&str, &[(&str, f64)])] = &[
    // Task type
    ("web app", &[("Replit", 0.9), ("Copilot", 0.8), ("Cursor", 0.7)]),
    ("website", &[("Replit", 0.9), ("Copilot", 0.7), ("Cursor", 0.6)]),
    ("api", &[("Copilot", 0.9), ("Cursor", 0.8), ("Replit", 0.7)]),
    ("mobile", &[("Copilot", 0.8), ("Cursor", 0.7), ("Replit", 0.6)]),
    ("enterprise", &[("Copilot", 0.95), ("Cursor", 0.8), ("Replit", 0.4)]),
    ("prototype", &[("Replit", 0.95), ("Copilot", 0.6), ("Cursor", 0.5)]),
    ("mvp", &[("Replit", 0.9), ("Copilot", 0.7), ("Cursor", 0.6)]),
    // Complexity
    ("simple", &[("Replit", 0.9), ("Copilot", 0.8), ("Cursor", 0.7)]),
    ("complex", &[("Cursor", 0.9), ("Copilot", 0.9), ("Replit", 0.5)]),
    ("large", &[("Cursor", 0.95), ("Copilot", 0.8), ("Replit", 0.4)]),
    ("refactor", &[("Cursor", 0.95), ("Copilot", 0.8), ("Replit", 0.3)]),
    // Workflow
    ("github", &[("Copilot", 0.95), ("Cursor", 0.6), ("Replit", 0.5)]),
    ("collaboration", &[("Copilot", 0.9), ("Replit", 0.8), ("Cursor", 0.6)]),
    ("deployment", &[("Replit", 0.9), ("Copilot", 0.7), ("Cursor", 0.6)]),
    ("security", &[("Copilot", 0.9), ("Cursor", 0.7), ("Replit", 0.6)]),
    // Experience level
    ("beginner", &[("Replit", 0.9), ("Copilot", 0.7), ("Cursor", 0.5)]),
    ("learning", &[("Replit", 0.9), ("Copilot", 0.8), ("Cursor", 0.6)]),
    ("education", &[("Replit", 0.95), ("Copilot", 0.7), ("Cursor", 0.5)]),
];

/// Weight of `keyword` for `agent`, if the table has one.
pub fn keyword_weight(keyword: &str, agent: &str) -> Option<f64> {
    KEYWORD_WEIGHTS
        .iter()
        .find(|(k, _)| *k == keyword)
        .and_then(|(_, weights)| weights.iter().find(|(a, _)| *a == agent))
        .map(|(_, w)| *w)
}

/// Score `profile` against a description and its analysis.
///
/// Keyword matches accumulate without an intermediate cap; only the final
/// result is clamped.
pub fn score_agent(profile: &AgentProfile, description: &str, analysis: &TaskAnalysis) -> f64 {
    let text = description.to_lowercase();
    let mut score = BASE_SCORE;

    for (keyword, _) in KEYWORD_WEIGHTS {
        if !text.contains(keyword) {
            continue;
        }
        if let Some(weight) = keyword_weight(keyword, &profile.name) {
            score += weight * KEYWORD_FACTOR;
        }
    }

    if profile.handles_complexity(analysis.complexity.as_str()) {
        score += COMPLEXITY_BONUS;
    }

    if profile.supports_project_type(analysis.project_type.as_str()) {
        score += PROJECT_TYPE_BONUS;
    }

    // Added once per tag; a single multiplied bonus rounds differently.
    for tag in &profile.ideal_for {
        if text.contains(tag.as_str()) {
            score += IDEAL_FOR_BONUS;
        }
    }

    score.min(1.0)
}
