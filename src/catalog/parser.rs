//! YAML parser for agent profiles.
//!
//! Uses `serde_yaml_ng`, the same format for built-in and custom profiles.

use crate::models::AgentProfile;

/// Parse a YAML document into an [`AgentProfile`].
///
/// Expected format:
/// ```yaml
/// name: Aider
/// strengths: [Terminal-first workflow, Git-aware edits]
/// tools: [Chat, Repo map]
/// use_cases: [Pair programming in the terminal]
/// pricing: Free and open source
/// ideal_for: [terminal, open_source]
/// complexity_handling: [simple, medium]
/// project_types: [api]
/// ```
///
/// Only `name` is required; list fields default to empty.
pub fn parse_agent_profile(content: &str) -> Result<AgentProfile, String> {
    let profile: AgentProfile =
        serde_yaml_ng::from_str(content).map_err(|e| format!("invalid profile: {e}"))?;

    if profile.name.trim().is_empty() {
        return Err("agent profile name must not be empty".to_string());
    }

    Ok(profile)
}
