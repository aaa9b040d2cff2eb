//! # Appneural Blueprint Info Command
//!
//! File: cli/src/commands/blueprint/info.rs
//!
//! ## Overview
//!
//! Implements `appneural blueprint info <name>`, which describes a blueprint
//! without generating it:
//! - Title (first `# ` heading of the blueprint's README.md) and catalog description
//! - Project type, build tool and suggested npm script
//! - The number of files and a tree of where they will be written
//! - How to generate it
//!
//! ## Examples
//!
//! ```bash
//! appneural blueprint info react-native-app
//! ```
//!
//! An unknown name fails with the same `UnknownBlueprint` error as `new`.
//!
use super::utils::{project_detector, tree_printer};
use crate::core::catalog::{self, BlueprintDefinition};
use crate::core::error::Result;
use clap::Parser;
use std::fmt::Write as FmtWrite;
use tracing::info;

/// # Info Blueprint Arguments (`InfoArgs`)
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Name of the blueprint to describe (see `appneural blueprint list`).
    #[arg(required = true)]
    blueprint_name: String,
}

/// # Handle Blueprint Info Command (`handle_info`)
pub async fn handle_info(args: InfoArgs) -> Result<()> {
    info!(
        "Handling blueprint info command for '{}'...",
        args.blueprint_name
    );

    let definition = catalog::find_blueprint(&args.blueprint_name)
        .ok_or_else(|| catalog::unknown_blueprint(&args.blueprint_name))?;

    print!("{}", format_info(&args.blueprint_name, definition)?);
    Ok(())
}

fn format_info(name: &str, definition: &BlueprintDefinition) -> Result<String> {
    let title = definition
        .file("README.md")
        .and_then(extract_title)
        .unwrap_or_else(|| name.to_string());
    let project_info = project_detector::detect_project_type(definition);
    let paths: Vec<&str> = definition.files.iter().map(|file| file.path).collect();
    let tree = tree_printer::render_file_tree(name, &paths)?;

    let mut out = String::new();
    writeln!(out, "\nBlueprint Details: {}", name)?;
    writeln!(out, "  Title:          {}", title)?;
    writeln!(out, "  Description:    {}", definition.description)?;
    writeln!(out, "  Type:           {}", project_info.project_type)?;
    writeln!(out, "  Build System:   {}", project_info.build_system)?;
    if let Some(script) = &project_info.run_script {
        writeln!(out, "  Run With:       npm run {}", script)?;
    }
    writeln!(out, "  Files:          {}", definition.files.len())?;
    writeln!(out, "\n  File Structure:")?;
    for line in tree.lines() {
        writeln!(out, "    {}", line)?;
    }
    writeln!(out, "\n  Usage:")?;
    writeln!(out, "    appneural blueprint new {} --dir <target-directory>", name)?;
    Ok(out)
}

/// Text of the first level-one heading (`# Title`), if any.
fn extract_title(readme: &str) -> Option<String> {
    readme
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}
