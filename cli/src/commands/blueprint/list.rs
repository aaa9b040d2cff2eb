//! # Appneural Blueprint List Command
//!
//! File: cli/src/commands/blueprint/list.rs
//!
//! ## Overview
//!
//! Implements `appneural blueprint list`, which prints every blueprint in the
//! catalog with its description, in catalog order.
//!
//! Example output:
//!
//! ```text
//! Available Blueprints:
//!
//! Name               | Description
//! -------------------+---------------------------------------------------
//! nest-microservice  | APPNEURAL NestJS microservice bootstrap
//! react-native-app   | APPNEURAL React Native starter
//! webapp             | APPNEURAL web frontend
//!
//! Found 3 blueprint(s).
//! Use 'appneural blueprint info <Name>' for details or 'appneural blueprint new <Name>' to use one.
//! ```
//!
//! With `--json` the same rows are printed as a JSON array of
//! `{"name", "description"}` objects.
//!
use crate::core::catalog::{self, BlueprintSummary};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::fmt::Write as FmtWrite;
use tracing::info;

/// # List Blueprint Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print the blueprints as a JSON array instead of a table.
    #[arg(long)]
    json: bool,
}

/// # Handle Blueprint List Command (`handle_list`)
pub async fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling blueprint list command...");
    let blueprints = catalog::list_blueprints();

    if args.json {
        let json = serde_json::to_string_pretty(&blueprints)
            .context("Failed to serialize blueprint list")?;
        println!("{}", json);
    } else {
        print!("{}", format_blueprint_table(&blueprints));
    }
    Ok(())
}

/// # Format Blueprint Table (`format_blueprint_table`)
///
/// Lays out name/description rows with a name column sized to the longest
/// name (clamped to 10..=30), followed by a count and usage hints.
fn format_blueprint_table(blueprints: &[BlueprintSummary]) -> String {
    let mut out = String::new();
    if blueprints.is_empty() {
        out.push_str("\nNo blueprints available.\n");
        return out;
    }

    let name_width = blueprints
        .iter()
        .map(|summary| summary.name.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 30);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\nAvailable Blueprints:\n");
    let _ = writeln!(out, "{:<width$} | Description", "Name", width = name_width);
    let _ = writeln!(out, "{:-<width$}-+-{:-<50}", "", "", width = name_width);
    for summary in blueprints {
        let _ = writeln!(
            out,
            "{:<width$} | {}",
            summary.name,
            summary.description,
            width = name_width
        );
    }
    let _ = writeln!(out, "\nFound {} blueprint(s).", blueprints.len());
    let _ = writeln!(
        out,
        "Use 'appneural blueprint info <Name>' for details or 'appneural blueprint new <Name>' to use one."
    );
    out
}
