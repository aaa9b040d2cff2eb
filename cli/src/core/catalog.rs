//! # Appneural Blueprint Catalog
//!
//! File: cli/src/core/catalog.rs
//!
//! ## Overview
//!
//! The catalog is the source of truth for what `appneural blueprint new` can
//! generate. It is an ordered, immutable table mapping a blueprint identifier
//! to a description and an ordered list of `(relative path, literal content)`
//! pairs.
//!
//! ## Architecture
//!
//! - The literal file contents live in the repository's top-level
//!   `blueprints/<name>/` directories and are embedded with `include_str!`,
//!   so the table is `'static` data fixed at compile time and never read
//!   from disk at runtime.
//! - Declaration order is significant: `list_blueprints` and error messages
//!   report blueprints in the order they appear in [`BLUEPRINTS`].
//! - Contents are written verbatim. There is no variable substitution.
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::catalog;
//!
//! for summary in catalog::list_blueprints() {
//!     println!("{:<20} {}", summary.name, summary.description);
//! }
//!
//! if let Some(definition) = catalog::find_blueprint("webapp") {
//!     println!("{} files", definition.files.len());
//! }
//! ```
//!
use crate::core::error::AppneuralError;
use serde::Serialize;

/// A single file emitted by a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueprintFile {
    /// Path relative to the generation target, always `/`-separated.
    pub path: &'static str,
    /// Exact content written to disk.
    pub contents: &'static str,
}

/// Description and file set of one blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueprintDefinition {
    pub description: &'static str,
    pub files: &'static [BlueprintFile],
}

impl BlueprintDefinition {
    /// Looks up the literal content for `path`, if the blueprint writes it.
    pub fn file(&self, path: &str) -> Option<&'static str> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.contents)
    }
}

/// One row of [`list_blueprints`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintSummary {
    pub name: &'static str,
    pub description: &'static str,
}

/// Embeds `blueprints/<blueprint>/<path>` as a [`BlueprintFile`].
macro_rules! blueprint_file {
    ($blueprint:literal, $path:literal) => {
        BlueprintFile {
            path: $path,
            contents: include_str!(concat!("../../../blueprints/", $blueprint, "/", $path)),
        }
    };
}

/// Every blueprint known to the generator, in declaration order.
pub static BLUEPRINTS: &[(&str, BlueprintDefinition)] = &[
    (
        "nest-microservice",
        BlueprintDefinition {
            description: "APPNEURAL NestJS microservice bootstrap",
            files: &[
                blueprint_file!("nest-microservice", "package.json"),
                blueprint_file!("nest-microservice", "tsconfig.json"),
                blueprint_file!("nest-microservice", "src/main.ts"),
                blueprint_file!("nest-microservice", "src/modules/app.module.ts"),
                blueprint_file!("nest-microservice", "src/rest/app.controller.ts"),
                blueprint_file!("nest-microservice", "src/services/app.service.ts"),
                blueprint_file!("nest-microservice", "README.md"),
            ],
        },
    ),
    (
        "react-native-app",
        BlueprintDefinition {
            description: "APPNEURAL React Native starter",
            files: &[
                blueprint_file!("react-native-app", "package.json"),
                blueprint_file!("react-native-app", "App.tsx"),
                blueprint_file!("react-native-app", "src/navigation/index.tsx"),
                blueprint_file!("react-native-app", "src/screens/HomeScreen.tsx"),
                blueprint_file!("react-native-app", "README.md"),
            ],
        },
    ),
    (
        "webapp",
        BlueprintDefinition {
            description: "APPNEURAL web frontend",
            files: &[
                blueprint_file!("webapp", "package.json"),
                blueprint_file!("webapp", "tsconfig.json"),
                blueprint_file!("webapp", "src/main.tsx"),
                blueprint_file!("webapp", "src/pages/App.tsx"),
                blueprint_file!("webapp", "README.md"),
            ],
        },
    ),
];

/// Returns one `{name, description}` pair per catalog entry, in declaration order.
pub fn list_blueprints() -> Vec<BlueprintSummary> {
    BLUEPRINTS
        .iter()
        .map(|(name, definition)| BlueprintSummary {
            name: *name,
            description: definition.description,
        })
        .collect()
}

/// Blueprint identifiers in declaration order.
pub fn blueprint_names() -> Vec<&'static str> {
    BLUEPRINTS.iter().map(|(name, _)| *name).collect()
}

/// The `UnknownBlueprint` error for `name`, listing every valid identifier.
pub fn unknown_blueprint(name: &str) -> AppneuralError {
    AppneuralError::UnknownBlueprint {
        name: name.to_string(),
        available: blueprint_names().into_iter().map(String::from).collect(),
    }
}

/// Finds the catalog entry registered under `name`, with its `'static` identifier.
pub fn find_entry(name: &str) -> Option<(&'static str, &'static BlueprintDefinition)> {
    BLUEPRINTS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(candidate, definition)| (*candidate, definition))
}

/// Finds the definition registered under `name`.
pub fn find_blueprint(name: &str) -> Option<&'static BlueprintDefinition> {
    find_entry(name).map(|(_, definition)| definition)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::{Component, Path};

    #[test]
    fn test_list_blueprints_declaration_order() {
        let names: Vec<&str> = list_blueprints().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["nest-microservice", "react-native-app", "webapp"]);
        assert_eq!(names, blueprint_names());
    }

    #[test]
    fn test_list_blueprints_is_stable_and_matches_catalog() {
        let first = list_blueprints();
        let second = list_blueprints();
        assert_eq!(first, second);
        assert_eq!(first.len(), BLUEPRINTS.len());
        for summary in &first {
            let definition = find_blueprint(summary.name).expect("listed blueprint must resolve");
            assert_eq!(summary.description, definition.description);
        }
    }

    #[test]
    fn test_catalog_invariants() {
        let mut seen_names = HashSet::new();
        for (name, definition) in BLUEPRINTS {
            assert!(seen_names.insert(*name), "duplicate blueprint '{}'", name);
            assert!(!definition.files.is_empty(), "'{}' has no files", name);

            let mut seen_paths = HashSet::new();
            for file in definition.files {
                assert!(
                    seen_paths.insert(file.path),
                    "'{}' lists '{}' twice",
                    name,
                    file.path
                );
                assert!(
                    Path::new(file.path)
                        .components()
                        .all(|c| matches!(c, Component::Normal(_))),
                    "'{}' has a non-relative path '{}'",
                    name,
                    file.path
                );
            }
        }
    }

    #[test]
    fn test_find_blueprint() {
        let nest = find_blueprint("nest-microservice").unwrap();
        assert_eq!(nest.description, "APPNEURAL NestJS microservice bootstrap");
        assert_eq!(nest.files.len(), 7);
        assert_eq!(find_blueprint("react-native-app").unwrap().files.len(), 5);
        assert_eq!(find_blueprint("webapp").unwrap().files.len(), 5);
        assert!(find_blueprint("unknown-kit").is_none());
        assert!(find_blueprint("").is_none());
        assert!(find_blueprint("Webapp").is_none());
    }

    #[test]
    fn test_find_entry_returns_static_name() {
        let (name, definition) = find_entry("webapp").unwrap();
        assert_eq!(name, "webapp");
        assert!(std::ptr::eq(definition, find_blueprint("webapp").unwrap()));
        assert!(find_entry("unknown-kit").is_none());
    }

    #[test]
    fn test_json_files_are_pretty_printed_without_trailing_newline() {
        for (name, definition) in BLUEPRINTS {
            for file in definition.files.iter().filter(|f| f.path.ends_with(".json")) {
                let value: serde_json::Value = serde_json::from_str(file.contents)
                    .unwrap_or_else(|e| panic!("{}/{} is not valid JSON: {}", name, file.path, e));
                assert!(value.is_object());
                assert!(file.contents.starts_with("{\n  \""));
                assert!(!file.contents.ends_with('\n'));
            }
        }
    }

    #[test]
    fn test_package_names_and_source_files() {
        let nest = find_blueprint("nest-microservice").unwrap();
        let manifest: serde_json::Value =
            serde_json::from_str(nest.file("package.json").unwrap()).unwrap();
        assert_eq!(manifest["name"], "appneural-nest-microservice");
        assert_eq!(manifest["scripts"]["dev"], "ts-node-dev --respawn src/main.ts");

        let main_ts = nest.file("src/main.ts").unwrap();
        assert!(main_ts.starts_with("import { NestFactory } from '@nestjs/core';\n"));
        assert!(main_ts.ends_with("void bootstrap();\n"));

        let webapp = find_blueprint("webapp").unwrap();
        assert_eq!(
            webapp.file("README.md"),
            Some("# APPNEURAL Webapp\n\nReady-to-go Vite React blueprint wired for APPNEURAL quality workflows.\n")
        );
        assert!(webapp.file("src/missing.tsx").is_none());
    }
}
