//! # Appneural Project Type Detector
//!
//! File: cli/src/commands/blueprint/utils/project_detector.rs
//!
//! ## Overview
//!
//! Inspects the files a blueprint will write to describe the project it
//! produces: the framework, the build tool, and the npm script a developer
//! should run first. Detection reads the blueprint's literal `package.json`
//! from the catalog; nothing is read from disk.
//!
//! ## Detection Strategy
//!
//! 1. Without a `package.json` the project is reported as "Unknown".
//! 2. Otherwise `dependencies` and `devDependencies` are scanned for marker
//!    packages, most specific first: NestJS, React Native/Expo, React, then
//!    plain TypeScript or Node.js.
//! 3. The build tool is Vite or Expo when those packages are present, npm otherwise.
//! 4. The suggested script is `dev` when defined, else `start`.
//!
use crate::core::catalog::BlueprintDefinition;
use serde_json::Value;
use tracing::debug;

/// # Project Information Struct (`ProjectInfo`)
///
/// Result of the detection process for one blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// The framework or language detected (e.g., "NestJS", "React (web)").
    pub project_type: String,
    /// The build tool or package manager (e.g., "Vite", "npm").
    pub build_system: String,
    /// npm script to start developing (`dev` or `start`), when one exists.
    pub run_script: Option<String>,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        ProjectInfo {
            project_type: "Unknown".to_string(),
            build_system: "Unknown".to_string(),
            run_script: None,
        }
    }
}

/// # Detect Project Type (`detect_project_type`)
///
/// Describes the project `definition` generates. Never fails; malformed or
/// missing manifests yield `ProjectInfo::default()`.
pub fn detect_project_type(definition: &BlueprintDefinition) -> ProjectInfo {
    let Some(manifest) = definition.file("package.json") else {
        debug!("Blueprint has no package.json; project type unknown.");
        return ProjectInfo::default();
    };
    let manifest: Value = match serde_json::from_str(manifest) {
        Ok(value) => value,
        Err(e) => {
            debug!("Could not parse blueprint package.json: {}", e);
            return ProjectInfo::default();
        }
    };

    let has_dependency = |name: &str| {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| manifest[*section].get(name).is_some())
    };

    let project_type = if has_dependency("@nestjs/core") {
        "NestJS"
    } else if has_dependency("react-native") || has_dependency("expo") {
        "React Native"
    } else if has_dependency("react") {
        "React (web)"
    } else if has_dependency("typescript") {
        "TypeScript"
    } else {
        "Node.js"
    };

    let build_system = if has_dependency("vite") {
        "Vite"
    } else if has_dependency("expo") {
        "Expo"
    } else {
        "npm"
    };

    let run_script = ["dev", "start"]
        .iter()
        .find(|script| manifest["scripts"].get(**script).is_some())
        .map(|script| script.to_string());

    ProjectInfo {
        project_type: project_type.to_string(),
        build_system: build_system.to_string(),
        run_script,
    }
}
