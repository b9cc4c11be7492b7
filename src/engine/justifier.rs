//! Human-readable justification for a score.

use crate::models::{Complexity, ProjectType, TaskAnalysis, Workflow};

/// Qualitative band for a raw score.
pub fn score_band(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent"
    } else if score >= 0.6 {
        "Good"
    } else {
        "Moderate"
    }
}

/// Explain why `agent` received `score` for a task with `analysis`.
///
/// At most one complexity sentence and one project/workflow sentence are
/// appended after the band sentence.
pub fn justify(agent: &str, score: f64, analysis: &TaskAnalysis) -> String {
    let mut parts = vec![format!("{} match for your requirements.", score_band(score))];

    if analysis.complexity == Complexity::Simple && agent == "Replit" {
        parts.push(
            "Replit excels at rapid prototyping and simple applications with no setup required."
                .to_string(),
        );
    } else if analysis.complexity == Complexity::Complex && matches!(agent, "Cursor" | "Copilot") {
        parts.push(format!(
            "{agent} handles complex projects well with advanced AI capabilities."
        ));
    }

    if analysis.project_type == ProjectType::WebApplication && agent == "Replit" {
        parts.push("Perfect for web apps with built-in deployment and database.".to_string());
    } else if analysis.workflow == Workflow::GithubIntegrated && agent == "Copilot" {
        parts.push(
            "Native GitHub integration makes it ideal for GitHub-based workflows.".to_string(),
        );
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn analysis(complexity: Complexity, project_type: ProjectType, workflow: Workflow) -> TaskAnalysis {
        TaskAnalysis {
            complexity,
            project_type,
            workflow,
            ..TaskAnalysis::default()
        }
    }

    #[test]
    fn bands() {
        assert_eq!(score_band(1.0), "Excellent");
        assert_eq!(score_band(0.8), "Excellent");
        assert_eq!(score_band(0.79), "Good");
        assert_eq!(score_band(0.6), "Good");
        assert_eq!(score_band(0.59), "Moderate");
    }

    #[test]
    fn band_only_when_nothing_applies() {
        let text = justify("Cursor", 0.7, &TaskAnalysis::default());
        assert_eq!(text, "Good match for your requirements.");
    }

    #[test]
    fn replit_simple_web_app_gets_both_sentences() {
        let a = analysis(Complexity::Simple, ProjectType::WebApplication, Workflow::Standard);
        assert_eq!(
            justify("Replit", 0.97, &a),
            "Excellent match for your requirements. \
             Replit excels at rapid prototyping and simple applications with no setup required. \
             Perfect for web apps with built-in deployment and database."
        );
    }

    #[test]
    fn complex_sentence_names_the_agent() {
        let a = analysis(Complexity::Complex, ProjectType::General, Workflow::Standard);
        assert_eq!(
            justify("Cursor", 1.0, &a),
            "Excellent match for your requirements. \
             Cursor handles complex projects well with advanced AI capabilities."
        );
        assert_eq!(justify("Replit", 0.55, &a), "Moderate match for your requirements.");
    }

    #[test]
    fn copilot_github_workflow() {
        let a = analysis(Complexity::Complex, ProjectType::General, Workflow::GithubIntegrated);
        assert_eq!(
            justify("Copilot", 0.9, &a),
            "Excellent match for your requirements. \
             Copilot handles complex projects well with advanced AI capabilities. \
             Native GitHub integration makes it ideal for GitHub-based workflows."
        );
    }

    #[test]
    fn web_application_sentence_shadows_github_for_replit_only() {
        let a = analysis(Complexity::Medium, ProjectType::WebApplication, Workflow::GithubIntegrated);
        assert!(justify("Copilot", 0.9, &a).contains("Native GitHub integration"));
        assert!(!justify("Replit", 0.9, &a).contains("GitHub"));
    }

    #[test]
    fn unknown_agents_get_band_only() {
        let a = analysis(Complexity::Complex, ProjectType::WebApplication, Workflow::GithubIntegrated);
        assert_eq!(justify("Aider", 0.65, &a), "Good match for your requirements.");
    }
}
