//! # Appneural Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the appneural CLI.
//! Two of them are the validation failures raised by the blueprint generator
//! before it touches the filesystem; the rest cover configuration and
//! filesystem problems surfaced by the ambient infrastructure.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AppneuralError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Each variant carries structured fields (the offending identifier, the
//! resolved path) in addition to its human-readable message, so callers can
//! inspect the failure with `downcast_ref` instead of parsing strings.
//!
//! ## Examples
//!
//! ```rust
//! match generator::generate(name, target).await {
//!     Ok(result) => println!("{} files written", result.files),
//!     Err(e) if matches!(
//!         e.downcast_ref::<AppneuralError>(),
//!         Some(AppneuralError::TargetExists { .. })
//!     ) => {
//!         println!("Pick another directory.");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the appneural application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppneuralError {
    /// The requested identifier is not a key of the blueprint catalog.
    #[error("Blueprint '{name}' not found. Available blueprints: {}", .available.join(", "))]
    UnknownBlueprint {
        name: String,
        available: Vec<String>,
    },

    /// The resolved destination is already present on disk.
    #[error("Target directory '{}' already exists.", .path.display())]
    TargetExists { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
