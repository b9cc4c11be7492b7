//! Configuration loading and layering.
//!
//! Handles `.agentmatch.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{CatalogConfig, Config, ConfigError, EngineConfig, ServerConfig};
