//! # Appneural Blueprint Utilities
//!
//! File: cli/src/commands/blueprint/utils/mod.rs
//!
//! ## Overview
//!
//! Helpers shared by the `blueprint` subcommands. Both work on catalog
//! data, so `info` can describe a blueprint without generating it.
//!
//! ```rust
//! use crate::commands::blueprint::utils::{project_detector, tree_printer};
//!
//! let info = project_detector::detect_project_type(definition);
//! let tree = tree_printer::render_file_tree("webapp", &paths)?;
//! ```
//!

/// # Project Detector (`project_detector`)
///
/// Reads a blueprint's `package.json` to name its framework, build tool and
/// the npm script to run first. Used by `info` and by the next-steps hint
/// printed after `new`.
pub mod project_detector;

/// # Tree Printer (`tree_printer`)
///
/// Renders a blueprint's relative file paths as a `tree`-style listing
/// (`├──`, `└──`). Used by `appneural blueprint info`.
pub mod tree_printer;
