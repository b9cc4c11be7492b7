//! Keyword-based task analysis.
//!
//! Each category is an ordered list of keyword groups. The first group with
//! a keyword contained in the lower-cased description decides the label;
//! later groups are not consulted.

use crate::models::{Complexity, ExperienceLevel, ProjectType, TaskAnalysis, Workflow};

type Rules<T> = &'static [(&'static [&'static str], T)];

const COMPLEXITY_RULES: Rules<Complexity> = &[
    (&["simple", "basic", "quick", "prototype", "demo"], Complexity::Simple),
    (&["complex", "enterprise", "large", "advanced", "production"], Complexity::Complex),
];

const PROJECT_TYPE_RULES: Rules<ProjectType> = &[
    (&["web app", "website", "frontend"], ProjectType::WebApplication),
    (&["api", "backend", "server"], ProjectType::ApiBackend),
    (&["mobile", "app", "android", "ios"], ProjectType::MobileApplication),
    (&["enterprise", "business"], ProjectType::EnterpriseApplication),
];

const WORKFLOW_RULES: Rules<Workflow> = &[
    (&["github", "git", "version control"], Workflow::GithubIntegrated),
    (&["deploy", "deployment", "hosting"], Workflow::DeploymentFocused),
    (&["collaborate", "team", "share"], Workflow::Collaborative),
];

const EXPERIENCE_RULES: Rules<ExperienceLevel> = &[
    (&["beginner", "new", "learning", "first time"], ExperienceLevel::Beginner),
    (&["advanced", "expert", "experienced"], ExperienceLevel::Advanced),
];

/// Derive the categorical profile of a task description.
pub fn analyze_task(description: &str) -> TaskAnalysis {
    let text = description.to_lowercase();

    TaskAnalysis {
        complexity: first_match(&text, COMPLEXITY_RULES),
        project_type: first_match(&text, PROJECT_TYPE_RULES),
        workflow: first_match(&text, WORKFLOW_RULES),
        experience_level: first_match(&text, EXPERIENCE_RULES),
    }
}

fn first_match<T: Copy + Default>(text: &str, rules: Rules<T>) -> T {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, label)| *label)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_yields_defaults() {
        assert_eq!(analyze_task(""), TaskAnalysis::default());
    }

    #[test]
    fn simple_todo_app() {
        let analysis = analyze_task("Build a simple todo app");
        assert_eq!(analysis.complexity, Complexity::Simple);
        assert_eq!(analysis.project_type, ProjectType::MobileApplication);
        assert_eq!(analysis.workflow, Workflow::Standard);
        assert_eq!(analysis.experience_level, ExperienceLevel::Intermediate);
    }

    #[test]
    fn simple_wins_over_complex() {
        let analysis = analyze_task("A complex system with a simple UI");
        assert_eq!(analysis.complexity, Complexity::Simple);
    }

    #[test]
    fn complex_keywords() {
        assert_eq!(analyze_task("Production rollout").complexity, Complexity::Complex);
        assert_eq!(analyze_task("LARGE codebase").complexity, Complexity::Complex);
    }

    #[test]
    fn project_type_precedence() {
        assert_eq!(
            analyze_task("website with an api").project_type,
            ProjectType::WebApplication
        );
        assert_eq!(
            analyze_task("REST API for mobile clients").project_type,
            ProjectType::ApiBackend
        );
        assert_eq!(
            analyze_task("an android client").project_type,
            ProjectType::MobileApplication
        );
        assert_eq!(
            analyze_task("business reporting").project_type,
            ProjectType::EnterpriseApplication
        );
    }

    #[test]
    fn enterprise_alone_is_complex_enterprise() {
        let analysis = analyze_task("enterprise platform");
        assert_eq!(analysis.complexity, Complexity::Complex);
        assert_eq!(analysis.project_type, ProjectType::EnterpriseApplication);
    }

    #[test]
    fn github_beats_deployment() {
        let analysis = analyze_task("Set up deployment from GitHub");
        assert_eq!(analysis.workflow, Workflow::GithubIntegrated);
    }

    #[test]
    fn other_workflows() {
        assert_eq!(analyze_task("hosting on a vps").workflow, Workflow::DeploymentFocused);
        assert_eq!(analyze_task("for my team").workflow, Workflow::Collaborative);
    }

    #[test]
    fn experience_levels() {
        assert_eq!(
            analyze_task("my first time coding").experience_level,
            ExperienceLevel::Beginner
        );
        assert_eq!(
            analyze_task("expert level tuning").experience_level,
            ExperienceLevel::Advanced
        );
    }

    #[test]
    fn substring_matching_is_not_word_based() {
        // "renew" contains "new", "digital" contains "git"
        let analysis = analyze_task("renew digital certificates");
        assert_eq!(analysis.experience_level, ExperienceLevel::Beginner);
        assert_eq!(analysis.workflow, Workflow::GithubIntegrated);
    }
}
