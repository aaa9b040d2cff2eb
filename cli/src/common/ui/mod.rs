//! # Appneural UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers shared by the commands.
//!
//! - **`prompts`**: Line input with a default value, built on `dialoguer`.
//!   Falls back to the default without asking when stdin is not a terminal,
//!   so scripted and test invocations never block.
//!
//! ```rust
//! use crate::common::ui::prompts;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let target = prompts::input_with_default("Target directory", "appneural-webapp")?;
//! # Ok(())
//! # }
//! ```
//!

/// Interactive prompts (target directory input).
pub mod prompts;
