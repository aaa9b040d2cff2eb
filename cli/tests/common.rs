//! # Appneural CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Each test
//! file declares `mod common;` and builds its commands through
//! [`appneural_cmd`] so every run is isolated from the developer's real
//! configuration.
//!

// Each test crate uses a different subset of these helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Appneural Command (`appneural_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `appneural` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn appneural_cmd() -> Command {
    Command::cargo_bin("appneural").expect("Failed to find appneural binary for testing")
}

/// # Isolated Appneural Command (`appneural_cmd_in`)
///
/// Like [`appneural_cmd`], but runs inside `dir` with `HOME` and
/// `XDG_CONFIG_HOME` pointed there too, so no user config file is picked up
/// and relative targets land inside `dir`. Stdin is empty, never a terminal.
pub fn appneural_cmd_in(dir: &Path) -> Command {
    let mut cmd = appneural_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .write_stdin("");
    cmd
}
