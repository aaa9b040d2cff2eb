//! # Appneural Blueprint Command Group
//!
//! File: cli/src/commands/blueprint/mod.rs
//!
//! ## Overview
//!
//! This module defines the `appneural blueprint` command group, which
//! scaffolds starter projects from the built-in blueprint catalog. It
//! routes to three subcommands:
//!
//! - `list`: Show every blueprint with its description
//! - `info`: Describe one blueprint and the files it writes
//! - `new`: Generate a blueprint into a new directory
//!
//! ## Examples
//!
//! ```bash
//! # See what can be generated
//! appneural blueprint list
//!
//! # Inspect a blueprint before using it
//! appneural blueprint info webapp
//!
//! # Generate into ./my-service
//! appneural blueprint new nest-microservice --dir my-service
//! ```
//!
//! The command routing flow:
//! 1. Parse `appneural blueprint <subcommand> [args...]` using Clap.
//! 2. `handle_blueprint` matches on the subcommand.
//! 3. The corresponding handler (e.g., `list::handle_list`) runs with its arguments.
//! 4. Results (or errors) are returned up the call stack.
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Handler and arguments for `appneural blueprint info`.
mod info;
/// Handler and arguments for `appneural blueprint list`.
mod list;
/// Handler and arguments for `appneural blueprint new`.
mod new;
/// Project detection and tree rendering shared by the subcommands.
pub mod utils;

/// # Blueprint Command Group Arguments (`BlueprintArgs`)
///
/// Captures which blueprint subcommand the user wants to execute.
#[derive(Parser, Debug)]
pub struct BlueprintArgs {
    #[command(subcommand)]
    command: BlueprintCommand,
}

/// # Blueprint Subcommands (`BlueprintCommand`)
#[derive(Subcommand, Debug)]
enum BlueprintCommand {
    /// List the available blueprints.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Show a blueprint's description, project type and file layout.
    Info(info::InfoArgs),
    /// Generate a blueprint into a new directory.
    #[command(alias = "create")]
    New(new::NewArgs),
}

/// # Handle Blueprint Command (`handle_blueprint`)
///
/// Dispatches to the handler of the parsed subcommand and propagates its result.
pub async fn handle_blueprint(args: BlueprintArgs) -> Result<()> {
    match args.command {
        BlueprintCommand::List(args) => list::handle_list(args).await?,
        BlueprintCommand::Info(args) => info::handle_info(args).await?,
        BlueprintCommand::New(args) => new::handle_new(args).await?,
    }
    Ok(())
}
