//! Agent profile types.

use serde::{Deserialize, Serialize};

/// A coding agent entry in the knowledge base.
///
/// The list-valued fields keep the exact strings and order they were
/// declared with: recommendations truncate from the front, and
/// `GET /agents` returns them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Unique name of the agent. Serialized as the catalog map key instead.
    #[serde(skip_serializing)]
    pub name: String,
    /// Feature list of the product.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Selling points, most important first.
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Tools shipped with the product, most important first.
    #[serde(default)]
    pub tools: Vec<String>,
    /// Typical use cases, most important first.
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Free-text pricing summary.
    #[serde(default)]
    pub pricing: String,
    /// Scenario tags. Matched literally against the lower-cased task
    /// description, underscores included.
    #[serde(default)]
    pub ideal_for: Vec<String>,
    /// Complexity levels the agent handles (`simple`, `medium`, ...).
    #[serde(default)]
    pub complexity_handling: Vec<String>,
    /// Project types the agent supports.
    #[serde(default)]
    pub project_types: Vec<String>,
}

impl AgentProfile {
    /// Whether `complexity` appears in the declared complexity levels.
    pub fn handles_complexity(&self, complexity: &str) -> bool {
        self.complexity_handling.iter().any(|c| c == complexity)
    }

    /// Whether `project_type` appears in the declared project types.
    pub fn supports_project_type(&self, project_type: &str) -> bool {
        self.project_types.iter().any(|p| p == project_type)
    }
}
