//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use agentmatch::catalog::Catalog;
use agentmatch::models::RecommendationResponse;
use agentmatch::output::OutputRenderer;
use agentmatch::output::json::JsonRenderer;
use agentmatch::output::terminal::TerminalRenderer;

/// Recommends an AI coding agent for a task description.
#[derive(Parser, Debug)]
#[command(name = "agentmatch", version = agentmatch::constants::VERSION)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Directory of extra agent profile YAML files.
    #[arg(long, global = true)]
    pub profile_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server.
    Serve(ServeArgs),

    /// Recommend agents for a task description.
    Recommend(RecommendArgs),

    /// List the agent catalog.
    Agents(AgentsArgs),

    /// Validate a custom agent profile file.
    Validate(ValidateArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind (default from config: 0.0.0.0).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (default from config: 8000).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for the `recommend` subcommand.
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Free-text task description.
    pub description: String,

    /// Number of recommendations to show (default from config: 3).
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `agents` subcommand.
#[derive(Parser, Debug)]
pub struct AgentsArgs {
    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the agent profile YAML file to validate.
    pub file: PathBuf,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    fn renderer(self) -> &'static dyn OutputRenderer {
        match self {
            OutputFormat::Terminal => &TerminalRenderer,
            OutputFormat::Json => &JsonRenderer,
        }
    }

    /// Render recommendations using the renderer for this format.
    pub fn render_recommendations(self, response: &RecommendationResponse) -> String {
        self.renderer().render_recommendations(response)
    }

    /// Render the catalog using the renderer for this format.
    pub fn render_catalog(self, catalog: &Catalog) -> String {
        self.renderer().render_catalog(catalog)
    }
}
