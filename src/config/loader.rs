//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.agentmatch.toml` in the working directory
//! 4. `~/.config/agentmatch/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_TOP_N, ENV_CORS, ENV_HOST, ENV_PORT, ENV_PROFILE_DIR,
    ENV_TOP_N,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
    pub catalog: CatalogConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allow any origin, method and header. Not suitable for production.
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            permissive_cors: true,
        }
    }
}

/// Ranking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of recommendations returned per request.
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory of extra agent profile YAML files.
    pub profile_dir: Option<PathBuf>,
}

/// Keys present in one config file. Absent keys leave lower layers alone,
/// so a file can also restore a built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    server: ServerLayer,
    engine: EngineLayer,
    catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ServerLayer {
    host: Option<String>,
    port: Option<u16>,
    permissive_cors: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct EngineLayer {
    top_n: Option<usize>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then `base_dir/.agentmatch.toml`, then
    /// applies environment variable overrides.
    pub fn load(base_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_layer(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = base_dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_layer(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a complete config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.merge(Self::load_layer(path)?);
        Ok(config)
    }

    fn load_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config; keys set in the layer win.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(host) = layer.server.host {
            self.server.host = host;
        }
        if let Some(port) = layer.server.port {
            self.server.port = port;
        }
        if let Some(cors) = layer.server.permissive_cors {
            self.server.permissive_cors = cors;
        }

        if let Some(top_n) = layer.engine.top_n {
            self.engine.top_n = top_n;
        }

        if layer.catalog.profile_dir.is_some() {
            self.catalog.profile_dir = layer.catalog.profile_dir;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_HOST) {
            self.server.host = val;
        }
        if let Ok(val) = env.var(ENV_PORT) {
            match val.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("ignoring invalid {ENV_PORT} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_TOP_N) {
            match val.parse::<usize>() {
                Ok(n) => self.engine.top_n = n,
                Err(_) => tracing::warn!("ignoring invalid {ENV_TOP_N} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_PROFILE_DIR) {
            self.catalog.profile_dir = Some(PathBuf::from(val));
        }
        match env.flag(ENV_CORS) {
            Some(Ok(enabled)) => self.server.permissive_cors = enabled,
            Some(Err(val)) => tracing::warn!("ignoring invalid {ENV_CORS} value: {val}"),
            None => {}
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
