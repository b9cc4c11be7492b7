//! CLI command definitions, argument parsing, and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `info` (or `debug` with
/// `--verbose`) for this crate. Logs go to stderr so stdout stays clean
/// for rendered output.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "agentmatch=debug"
    } else {
        "agentmatch=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
