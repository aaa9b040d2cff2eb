//! # Appneural Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used across the CLI, kept separate from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: Async filesystem operations used by the blueprint generator.
//! - **`ui`**: Terminal interaction: the target directory prompt.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal user interface elements (prompts).
pub mod ui;
