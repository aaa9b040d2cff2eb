//! # Appneural Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `appneural` binary. Parses arguments, installs the
//! `tracing` subscriber (verbosity from `-v` flags) and dispatches to the
//! command group handlers in `commands`.
//!
//! ## Examples
//!
//! ```bash
//! appneural --help
//!
//! # Generate a blueprint with info-level logging
//! appneural -v blueprint new webapp --dir my-site
//! ```
//!
//! Any error reaching `main` is printed as `Error: <message>` on stderr and
//! the process exits with status 1.
//!
use clap::Parser;
use crate::core::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (blueprint)
mod common; // Shared utilities (fs, ui)
mod core; // Catalog, generator, config and errors

/// Top-level arguments of the `appneural` binary.
#[derive(Parser, Debug)]
#[command(
    name = "appneural",
    about = "APPNEURAL blueprint scaffolder",
    long_about = "Generate APPNEURAL starter projects from the built-in blueprint catalog.\n\
                  Run 'appneural blueprint list' to see what is available.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Command groups.
#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List, inspect and generate project blueprints.
    #[command(alias = "b")]
    Blueprint(commands::blueprint::BlueprintArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("appneural invoked with {:?}", cli);

    if let Err(err) = run(cli).await {
        tracing::error!("appneural failed: {:?}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Blueprint(args) => commands::blueprint::handle_blueprint(args).await,
    }
}

/// Installs the stderr `fmt` subscriber. `RUST_LOG` overrides the `-v` count.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbosity)));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_verbosity_and_alias() {
        let cli = Cli::try_parse_from(["appneural", "-vv", "b", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Blueprint(_)));
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(7), "trace");
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["appneural"]).is_err());
    }
}
