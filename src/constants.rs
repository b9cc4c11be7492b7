//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and engine limits so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "agentmatch";

/// Crate version, embedded at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.agentmatch.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".agentmatch.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "agentmatch";

/// Human-readable service name returned by `GET /`.
pub const SERVICE_TITLE: &str = "AI Coding Agent Recommendation System API";

// ── Engine limits ───────────────────────────────────────────────────

/// Number of recommendations returned when not configured otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// Strengths copied into each recommendation.
pub const MAX_STRENGTHS: usize = 4;

/// Use cases copied into each recommendation.
pub const MAX_USE_CASES: usize = 4;

/// Tools copied into each recommendation.
pub const MAX_TOOLS: usize = 6;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOST: &str = "AGENTMATCH_HOST";
pub const ENV_PORT: &str = "AGENTMATCH_PORT";
pub const ENV_TOP_N: &str = "AGENTMATCH_TOP_N";
pub const ENV_PROFILE_DIR: &str = "AGENTMATCH_PROFILE_DIR";
pub const ENV_CORS: &str = "AGENTMATCH_CORS";
