//! agentmatch — recommends an AI coding agent for a task.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use agentmatch::catalog::{self, Catalog};
use agentmatch::config::Config;
use agentmatch::constants;
use agentmatch::engine::RecommendationEngine;
use agentmatch::env::Env;
use agentmatch::models::RecommendationRequest;
use agentmatch::server;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{AgentsArgs, Cli, Command, RecommendArgs, ServeArgs, ValidateArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;
    if cli.profile_dir.is_some() {
        config.catalog.profile_dir = cli.profile_dir;
    }

    match cli.command {
        Command::Serve(args) => run_serve(args, config).await,
        Command::Recommend(args) => run_recommend(args, &config).await,
        Command::Agents(args) => run_agents(args, &config).await,
        Command::Validate(args) => run_validate(args).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Load the catalog, including custom profiles when configured.
async fn load_catalog(profile_dir: Option<&Path>) -> Result<Arc<Catalog>> {
    let catalog = Catalog::load(profile_dir)
        .await
        .context("failed to load agent catalog")?;
    tracing::debug!("catalog loaded: {}", catalog.names().join(", "));
    Ok(Arc::new(catalog))
}

/// Run the HTTP API.
async fn run_serve(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let catalog = load_catalog(config.catalog.profile_dir.as_deref()).await?;
    let engine = Arc::new(RecommendationEngine::new(catalog).with_top_n(config.engine.top_n));

    server::run_server(&config.bind_addr(), engine, config.server.permissive_cors)
        .await
        .with_context(|| format!("server on {} failed", config.bind_addr()))
}

/// Rank agents for a single description and print the result.
async fn run_recommend(args: RecommendArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog(config.catalog.profile_dir.as_deref()).await?;
    let top_n = args.top.unwrap_or(config.engine.top_n);
    let engine = RecommendationEngine::new(catalog).with_top_n(top_n);

    let response = engine
        .recommend(&RecommendationRequest::new(args.description))
        .context("failed to generate recommendations")?;

    print!("{}", args.format.render_recommendations(&response));
    Ok(())
}

/// List the catalog.
async fn run_agents(args: AgentsArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog(config.catalog.profile_dir.as_deref()).await?;

    if catalog.is_empty() {
        println!("No agents found.");
        return Ok(());
    }

    print!("{}", args.format.render_catalog(&catalog));
    Ok(())
}

/// Validate a custom agent profile file.
async fn run_validate(args: ValidateArgs) -> Result<()> {
    use colored::Colorize;

    let path: &PathBuf = &args.file;
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    match catalog::parser::parse_agent_profile(&content) {
        Ok(p) => {
            println!("  {} {}  {}", "✔".green().bold(), p.name.bold(), p.pricing.dimmed());
            if !p.ideal_for.is_empty() {
                println!("         {}  {}", "ideal for:".cyan(), p.ideal_for.join(", "));
            }
            if !p.complexity_handling.is_empty() {
                println!(
                    "         {}  {}",
                    "complexity:".cyan(),
                    p.complexity_handling.join(", ")
                );
            }
            if !p.project_types.is_empty() {
                println!("         {}  {}", "projects:".cyan(), p.project_types.join(", "));
            }
            println!(
                "         {}  {} strengths, {} use cases, {} tools",
                "lists:".cyan(),
                p.strengths.len(),
                p.use_cases.len(),
                p.tools.len(),
            );
            Ok(())
        }
        Err(e) => {
            bail!("{} {}", "✖".red().bold(), format!("Invalid profile: {e}").red());
        }
    }
}
