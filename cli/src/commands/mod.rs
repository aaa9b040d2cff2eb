//! # Appneural Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level command groups of the appneural CLI. Each group defines its own
//! arguments structure and a handler that `main.rs` dispatches to.
//!
//! ## Command Groups
//!
//! - `blueprint`: List, inspect and generate project blueprints
//!

/// Command group for project blueprints. Includes `list`, `info` and `new`.
pub mod blueprint;
