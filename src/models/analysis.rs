//! Categorical task analysis types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse categorical summary of a task description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub complexity: Complexity,
    pub project_type: ProjectType,
    pub workflow: Workflow,
    pub experience_level: ExperienceLevel,
}

/// How demanding the task is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

/// What kind of project the task is about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    WebApplication,
    ApiBackend,
    MobileApplication,
    EnterpriseApplication,
    #[default]
    General,
}

/// Which workflow the task revolves around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    GithubIntegrated,
    DeploymentFocused,
    Collaborative,
    #[default]
    Standard,
}

/// Experience level of the person asking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Complexity {
    /// Wire name, also used to match catalog `complexity_handling` entries.
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl ProjectType {
    /// Wire name, also used to match catalog `project_types` entries.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::WebApplication => "web_application",
            ProjectType::ApiBackend => "api_backend",
            ProjectType::MobileApplication => "mobile_application",
            ProjectType::EnterpriseApplication => "enterprise_application",
            ProjectType::General => "general",
        }
    }
}

impl Workflow {
    pub fn as_str(self) -> &'static str {
        match self {
            Workflow::GithubIntegrated => "github_integrated",
            Workflow::DeploymentFocused => "deployment_focused",
            Workflow::Collaborative => "collaborative",
            Workflow::Standard => "standard",
        }
    }
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Complexity, ProjectType, Workflow, ExperienceLevel);
