//! # Appneural Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the small amount of configuration
//! the blueprint commands use. Nothing here affects what a blueprint
//! contains; it only shapes how the CLI picks a target directory.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.appneural.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/appneural/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [blueprints]
//! target_prefix = "acme"   # `appneural blueprint new webapp` suggests `acme-webapp`
//! prompt = false           # never ask; use the suggested directory
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let suggested = cfg.blueprints.default_target("webapp");
//! ```
//!
use crate::core::error::{AppneuralError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub blueprints: BlueprintsConfig,
}

/// Settings for `appneural blueprint new`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BlueprintsConfig {
    /// Prefix of the suggested target directory (`<prefix>-<blueprint>`).
    #[serde(default = "default_target_prefix")]
    pub target_prefix: String,
    /// Ask for the target directory when `--dir` is omitted.
    #[serde(default = "default_prompt")]
    pub prompt: bool,
}

impl Default for BlueprintsConfig {
    fn default() -> Self {
        Self {
            target_prefix: default_target_prefix(),
            prompt: default_prompt(),
        }
    }
}

impl BlueprintsConfig {
    /// Directory name suggested for `blueprint` when the user gives none.
    pub fn default_target(&self, blueprint: &str) -> String {
        format!("{}-{}", self.target_prefix, blueprint)
    }
}

fn default_target_prefix() -> String {
    "appneural".to_string()
}
fn default_prompt() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".appneural.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Appneural", "appneural") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.appneural.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = BlueprintsConfig::default();
    let mut merged = Config::default();
    merged.blueprints.target_prefix =
        if project_cfg.blueprints.target_prefix != defaults.target_prefix {
            project_cfg.blueprints.target_prefix
        } else {
            user.blueprints.target_prefix
        };
    merged.blueprints.prompt = if project_cfg.blueprints.prompt != defaults.prompt {
        project_cfg.blueprints.prompt
    } else {
        user.blueprints.prompt
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    let prefix = &config.blueprints.target_prefix;
    if prefix.trim().is_empty() {
        return Err(anyhow!(AppneuralError::Config(
            "blueprints.target_prefix cannot be empty.".to_string()
        )));
    }
    if prefix.contains(['/', '\\']) {
        return Err(anyhow!(AppneuralError::Config(format!(
            "blueprints.target_prefix '{}' must not contain path separators.",
            prefix
        ))));
    }
    Ok(())
}
