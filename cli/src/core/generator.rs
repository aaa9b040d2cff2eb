//! # Appneural Blueprint Generator
//!
//! File: cli/src/core/generator.rs
//!
//! ## Overview
//!
//! Materializes a blueprint from the [`catalog`](crate::core::catalog) into a
//! new directory. Generation is all-or-nothing with respect to pre-existing
//! state: both validation failures are raised before anything is written,
//! and an existing path is never merged into or overwritten.
//!
//! ## Architecture
//!
//! The generator runs as an ordered chain of awaited `tokio::fs` steps:
//! 1. Look up the identifier in the catalog (`UnknownBlueprint` if absent).
//! 2. Resolve the target against the base directory (absolute targets are used
//!    as-is) and fold `.`/`..` segments lexically.
//! 3. Fail with `TargetExists` if anything already occupies the destination.
//! 4. Create the destination, then for each file create its parent directory
//!    and write the literal content.
//! 5. Return a [`BlueprintResult`] summarizing the run.
//!
//! An I/O failure during step 4 aborts the run and leaves whatever was
//! already written in place. There is no rollback.
//!
//! Two simultaneous generations into the same new directory can both pass the
//! existence check in step 3; this check-then-create race is not guarded.
//!
use crate::common::fs::io;
use crate::core::catalog;
use crate::core::error::{AppneuralError, Result};
use anyhow::Context;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Summary of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintResult {
    /// Identifier of the generated blueprint.
    pub name: &'static str,
    /// Absolute destination directory.
    pub directory: PathBuf,
    /// Number of files written; always equals the blueprint's file count.
    pub files: usize,
}

/// Generates blueprint `name` into `target`, resolved against the current working directory.
pub async fn generate(name: &str, target: &Path) -> Result<BlueprintResult> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    generate_in(name, target, &cwd).await
}

/// Generates blueprint `name` into `target`, resolving a relative `target` against `base_dir`.
pub async fn generate_in(name: &str, target: &Path, base_dir: &Path) -> Result<BlueprintResult> {
    let (blueprint_name, definition) =
        catalog::find_entry(name).ok_or_else(|| catalog::unknown_blueprint(name))?;

    let destination = resolve_destination(target, base_dir);
    debug!("Resolved blueprint destination: {}", destination.display());

    if io::path_exists(&destination).await? {
        anyhow::bail!(AppneuralError::TargetExists { path: destination });
    }

    io::ensure_dir_exists(&destination).await?;

    let mut count = 0;
    for file in definition.files {
        let final_path = destination.join(file.path);
        if let Some(parent) = final_path.parent() {
            io::ensure_dir_exists(parent).await?;
        }
        io::write_string_to_file(&final_path, file.contents).await?;
        count += 1;
    }

    info!("Blueprint '{}' files created: {}", blueprint_name, count);
    Ok(BlueprintResult {
        name: blueprint_name,
        directory: destination,
        files: count,
    })
}

/// Joins a relative `target` onto `base_dir` and folds `.` and `..` segments.
fn resolve_destination(target: &Path, base_dir: &Path) -> PathBuf {
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        base_dir.join(target)
    };
    normalize_lexically(&joined)
}

/// Removes `.` and `..` components without touching the filesystem.
/// `..` at the root stays at the root; symlinks are not resolved.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn assert_error(err: &anyhow::Error, expected: fn(&AppneuralError) -> bool) {
        match err.downcast_ref::<AppneuralError>() {
            Some(e) if expected(e) => {}
            other => panic!("Unexpected error: {:?} ({})", other, err),
        }
    }

    #[tokio::test]
    async fn test_generate_nest_microservice_scenario() -> Result<()> {
        let temp_dir = tempdir()?;
        let result = generate_in("nest-microservice", Path::new("out"), temp_dir.path()).await?;

        let out = temp_dir.path().join("out");
        assert_eq!(result.name, "nest-microservice");
        assert_eq!(result.files, 7);
        assert_eq!(result.directory, out);
        for relative in [
            "package.json",
            "tsconfig.json",
            "src/main.ts",
            "src/modules/app.module.ts",
            "src/rest/app.controller.ts",
            "src/services/app.service.ts",
            "README.md",
        ] {
            assert!(out.join(relative).is_file(), "missing {}", relative);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_writes_every_file_verbatim() -> Result<()> {
        for (name, definition) in catalog::BLUEPRINTS {
            let temp_dir = tempdir()?;
            let result = generate_in(name, Path::new(name), temp_dir.path()).await?;
            assert_eq!(result.files, definition.files.len());

            for file in definition.files {
                let written = fs::read(result.directory.join(file.path))?;
                assert_eq!(written, file.contents.as_bytes(), "{}/{}", name, file.path);
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_unknown_blueprint_touches_nothing() -> Result<()> {
        let temp_dir = tempdir()?;
        let err = generate_in("unknown-kit", Path::new("out"), temp_dir.path())
            .await
            .unwrap_err();

        assert_error(&err, |e| {
            matches!(e, AppneuralError::UnknownBlueprint { name, available }
                if name == "unknown-kit" && available.len() == 3)
        });
        assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_existing_empty_dir_fails() -> Result<()> {
        let temp_dir = tempdir()?;
        let existing = temp_dir.path().join("existing-dir");
        fs::create_dir(&existing)?;

        let err = generate_in("webapp", Path::new("existing-dir"), temp_dir.path())
            .await
            .unwrap_err();
        assert_error(&err, |e| matches!(e, AppneuralError::TargetExists { .. }));
        assert_eq!(fs::read_dir(&existing)?.count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_existing_file_left_unchanged() -> Result<()> {
        let temp_dir = tempdir()?;
        let existing = temp_dir.path().join("taken");
        fs::write(&existing, "keep me")?;

        let err = generate_in("react-native-app", &existing, temp_dir.path())
            .await
            .unwrap_err();
        assert_error(&err, |e| {
            matches!(e, AppneuralError::TargetExists { path } if path.ends_with("taken"))
        });
        assert_eq!(fs::read_to_string(&existing)?, "keep me");
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_twice_fails_second_time() -> Result<()> {
        let temp_dir = tempdir()?;
        generate_in("webapp", Path::new("site"), temp_dir.path()).await?;
        let readme = temp_dir.path().join("site/README.md");
        fs::write(&readme, "edited")?;

        let err = generate_in("webapp", Path::new("site"), temp_dir.path())
            .await
            .unwrap_err();
        assert_error(&err, |e| matches!(e, AppneuralError::TargetExists { .. }));
        assert_eq!(fs::read_to_string(&readme)?, "edited");
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_absolute_and_nested_targets() -> Result<()> {
        let temp_dir = tempdir()?;
        let elsewhere = tempdir()?;
        let absolute = elsewhere.path().join("deep/nested/app");

        let result = generate_in("webapp", &absolute, temp_dir.path()).await?;
        assert_eq!(result.directory, absolute);
        assert!(absolute.join("src/pages/App.tsx").is_file());
        assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generate_io_failure_propagates() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir()?;
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked)?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555))?;

        let result = generate_in("webapp", Path::new("locked/app"), temp_dir.path()).await;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        // Running as root bypasses directory permissions, so only check the failure path.
        if let Err(err) = result {
            assert!(err.downcast_ref::<AppneuralError>().is_none());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_uses_current_dir_for_absolute_target() -> Result<()> {
        let temp_dir = tempdir()?;
        let target = temp_dir.path().join("from-cwd");
        let result = generate("nest-microservice", &target).await?;
        assert_eq!(result.directory, target);
        assert_eq!(result.files, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_relative_to_current_dir() -> Result<()> {
        let temp_dir = tempdir()?;
        let cwd = std::env::current_dir()?;
        let relative = pathdiff::diff_paths(temp_dir.path().join("rel-out"), &cwd)
            .context("temp dir has no path relative to cwd")?;
        assert!(relative.is_relative());

        let result = generate("webapp", &relative).await?;
        assert_eq!(result.directory, temp_dir.path().join("rel-out"));
        assert!(temp_dir.path().join("rel-out/package.json").is_file());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_folds_dot_segments() -> Result<()> {
        let temp_dir = tempdir()?;
        let base = temp_dir.path().join("work");
        fs::create_dir(&base)?;

        let result = generate_in("webapp", Path::new("./out"), &base).await?;
        assert_eq!(result.directory, base.join("out"));
        assert_eq!(
            result.directory.display().to_string(),
            base.join("out").display().to_string()
        );

        let result = generate_in("webapp", Path::new("../sibling"), &base).await?;
        let sibling = temp_dir.path().join("sibling");
        assert_eq!(result.directory, sibling);
        assert!(!result.directory.display().to_string().contains(".."));
        assert!(sibling.join("src/main.tsx").is_file());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_dot_segments_reach_existing_target() -> Result<()> {
        let temp_dir = tempdir()?;
        let base = temp_dir.path().join("work");
        fs::create_dir_all(&base)?;
        fs::create_dir(temp_dir.path().join("taken"))?;

        let err = generate_in("webapp", Path::new("./../taken"), &base)
            .await
            .unwrap_err();
        assert_error(&err, |e| {
            matches!(e, AppneuralError::TargetExists { path } if !path.to_string_lossy().contains(".."))
        });
        Ok(())
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/work/./a/../b/./c")),
            PathBuf::from("/work/b/c")
        );
        assert_eq!(normalize_lexically(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize_lexically(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize_lexically(Path::new("./a/")), PathBuf::from("a"));
    }

    #[test]
    fn test_resolve_destination() {
        let base = Path::new("/work");
        assert_eq!(
            resolve_destination(Path::new("out"), base),
            PathBuf::from("/work/out")
        );
        assert_eq!(
            resolve_destination(Path::new("/abs/out"), base),
            PathBuf::from("/abs/out")
        );
        assert_eq!(
            resolve_destination(Path::new("../sibling"), base),
            PathBuf::from("/sibling")
        );
        assert_eq!(
            resolve_destination(Path::new("/abs/./x/../out"), base),
            PathBuf::from("/abs/out")
        );
    }
}
