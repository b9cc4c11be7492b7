//! Built-in agent profile registry.
//!
//! Profiles are embedded via `include_str!` so they ship with the binary.

use crate::catalog::parser;
use crate::models::AgentProfile;

const COPILOT_YAML: &str = include_str!("copilot.yaml");
const CURSOR_YAML: &str = include_str!("cursor.yaml");
const REPLIT_YAML: &str = include_str!("replit.yaml");

/// Built-in agent names in catalog order.
pub const BUILTIN_NAMES: &[&str] = &["Copilot", "Cursor", "Replit"];

/// Get a built-in agent profile by name.
pub fn get_builtin(name: &str) -> Option<AgentProfile> {
    let yaml = match name {
        "Copilot" => COPILOT_YAML,
        "Cursor" => CURSOR_YAML,
        "Replit" => REPLIT_YAML,
        _ => return None,
    };

    parser::parse_agent_profile(yaml).ok()
}

/// List all available built-in agent names.
pub fn list_builtin_names() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}
