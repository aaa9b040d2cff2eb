//! # Appneural Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem operations the blueprint generator
//! needs. Each function is a thin async wrapper over `tokio::fs` that adds
//! context to I/O errors using `anyhow::Context`.
//!
//! ## Architecture
//!
//! - **`path_exists`**: Reports whether *anything* occupies a path (file,
//!   directory, or symlink, including a dangling one). Links are not followed.
//! - **`ensure_dir_exists`**: Creates a directory and any missing parents
//!   (`create_dir_all`). Idempotent, but fails if the path is a non-directory.
//! - **`write_string_to_file`**: Creates or truncates a file and writes the
//!   given content byte-for-byte. The parent directory must already exist.
//!
//! The calls are awaited one after another by the caller; nothing here spawns
//! work in parallel.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let target = Path::new("./out/src");
//! if !io::path_exists(target).await? {
//!     io::ensure_dir_exists(target).await?;
//! }
//! io::write_string_to_file(&target.join("main.ts"), "void 0;\n").await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{AppneuralError, Result};
use anyhow::Context;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, trace};

/// Returns `true` if a filesystem entry of any kind exists at `path`.
///
/// Uses `symlink_metadata`, so a symlink counts as present even when its
/// target is missing. A `NotFound` error maps to `false`; every other error
/// (for example, permission denied on a parent) is propagated.
pub async fn path_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path).await {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to inspect path {}", path.display()))
        }
    }
}

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory,
/// `AppneuralError::FileSystem` is returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            trace!("Directory already exists: {}", path.display());
            Ok(())
        }
        Ok(_) => anyhow::bail!(AppneuralError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        ))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory {}", path.display()))?;
            debug!("Created directory: {}", path.display());
            Ok(())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to inspect directory {}", path.display()))
        }
    }
}

/// Writes `content` to `path`, creating the file or truncating an existing one.
pub async fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file {}", path.display()))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
