//! # Appneural Blueprint New Command
//!
//! File: cli/src/commands/blueprint/new.rs
//!
//! ## Overview
//!
//! Implements `appneural blueprint new <blueprint>`, which writes a blueprint
//! from the catalog into a directory that must not exist yet. It handles:
//! - Rejecting unknown blueprint names before anything else happens
//! - Choosing the target directory (`--dir`, an interactive prompt, or the
//!   configured default `<prefix>-<blueprint>`)
//! - Running the generator and reporting the result
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Check the blueprint name against the catalog (`UnknownBlueprint`)
//! 2. Load configuration for the default target prefix and prompt setting
//! 3. Resolve the target: `--dir` wins; otherwise prompt when stdin is a
//!    terminal and prompting is enabled; otherwise use the default. `~` is expanded.
//! 4. Call `generator::generate` (fails with `TargetExists` if the path is taken)
//! 5. Print a summary and next steps, or the result as JSON with `--json`
//!
//! ## Examples
//!
//! ```bash
//! # Generate into ./my-service
//! appneural blueprint new nest-microservice --dir my-service
//!
//! # Accept or edit the suggested directory interactively
//! appneural blueprint new webapp
//!
//! # Machine-readable result
//! appneural blueprint new react-native-app --dir ~/apps/mobile --json
//! ```
//!
use super::utils::project_detector;
use crate::common::ui::prompts;
use crate::core::catalog;
use crate::core::config::{self, BlueprintsConfig};
use crate::core::error::Result;
use crate::core::generator::{self, BlueprintResult};
use anyhow::Context;
use clap::Parser;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// # New Blueprint Arguments (`NewArgs`)
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Blueprint to generate (see `appneural blueprint list`).
    blueprint: String,

    /// Destination directory, absolute or relative to the current directory.
    /// Must not exist. Prompted for (or defaulted) when omitted.
    #[arg(long, short = 'd')]
    dir: Option<PathBuf>,

    /// Print the generation result as JSON.
    #[arg(long)]
    json: bool,
}

/// # Handle Blueprint New Command (`handle_new`)
pub async fn handle_new(args: NewArgs) -> Result<()> {
    info!("Handling blueprint new command for '{}'...", args.blueprint);

    let definition = catalog::find_blueprint(&args.blueprint)
        .ok_or_else(|| catalog::unknown_blueprint(&args.blueprint))?;

    let cfg = config::load_config().context("Failed to load appneural configuration")?;
    let target = resolve_target(args.dir.as_deref(), &args.blueprint, &cfg.blueprints)?;
    debug!(
        "Target directory for '{}': {}",
        args.blueprint,
        target.display()
    );

    let result = generator::generate(&args.blueprint, &target).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize blueprint result")?;
        println!("{}", json);
    } else {
        let run_script = project_detector::detect_project_type(definition).run_script;
        print!("{}", completion_message(&result, run_script.as_deref()));
    }
    Ok(())
}

/// Picks the target directory and expands a leading `~`.
fn resolve_target(
    dir: Option<&Path>,
    blueprint: &str,
    cfg: &BlueprintsConfig,
) -> Result<PathBuf> {
    let raw = match dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let default_target = cfg.default_target(blueprint);
            if cfg.prompt {
                PathBuf::from(prompts::input_with_default("Target directory", &default_target)?)
            } else {
                PathBuf::from(default_target)
            }
        }
    };
    Ok(expand_tilde(raw))
}

/// Expands `~` when the path starts with it. Non-UTF-8 paths are returned unchanged.
fn expand_tilde(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(text) if text.starts_with('~') => {
            PathBuf::from(shellexpand::tilde(text).into_owned())
        }
        _ => path,
    }
}

/// # Completion Message (`completion_message`)
///
/// Summary line plus next steps: `cd` into the project (relative to the
/// current directory when possible), install dependencies, and run the
/// blueprint's `dev`/`start` script when it has one.
fn completion_message(result: &BlueprintResult, run_script: Option<&str>) -> String {
    let mut out = format!(
        "\nBlueprint '{}' generated {} files at {}\n",
        result.name,
        result.files,
        result.directory.display()
    );

    let display_path = env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(&result.directory, cwd))
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or_else(|| result.directory.clone());

    out.push_str("\nNext steps:\n");
    out.push_str(&format!("  1. cd {}\n", display_path.display()));
    out.push_str("  2. npm install\n");
    if let Some(script) = run_script {
        out.push_str(&format!("  3. npm run {}\n", script));
    }
    out
}
