//! # Appneural Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the commands. The `io` submodule provides
//! the async existence check, directory creation and file writes the
//! blueprint generator awaits in sequence.
//!
//! Import from the submodule directly (e.g., `crate::common::fs::io::path_exists`).
//!

/// Contains async file I/O operations (`path_exists`, `ensure_dir_exists`, `write_string_to_file`).
pub mod io;
