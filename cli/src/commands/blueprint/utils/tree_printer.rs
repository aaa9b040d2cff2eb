//! # Appneural Blueprint Tree Printer
//!
//! File: cli/src/commands/blueprint/utils/tree_printer.rs
//!
//! ## Overview
//!
//! Renders the relative file paths of a blueprint as a tree, similar to the
//! output of the `tree` command-line utility. It's used by
//! `appneural blueprint info` to show what `blueprint new` will write before
//! anything touches the disk, so the tree is built from the catalog's paths
//! rather than from a directory walk.
//!
//! ## Architecture
//!
//! - Paths are split on `/` and folded into a nested map of nodes.
//! - Each level is listed directories first, then files, alphabetically.
//! - Indentation and connector lines (├──, └──, │) follow `tree`.
//! - Directory names are bold (ANSI escape codes).
//!
//! Example output:
//!
//! ```text
//! webapp/
//! ├── src/
//! │   ├── pages/
//! │   │   └── App.tsx
//! │   └── main.tsx
//! ├── README.md
//! ├── package.json
//! └── tsconfig.json
//! ```
//!
use crate::core::error::Result;
use anyhow::anyhow;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt::Write as FmtWrite, // Aliased to avoid clashing with io::Write
};

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a directory listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a directory listing ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";
/// ANSI escape code to start bold text formatting (for directories).
const BOLD_START: &str = "\x1b[1m";
/// ANSI escape code to reset text formatting (ends bolding).
const BOLD_END: &str = "\x1b[0m";

/// One node of the path tree. Leaves are files; anything with children is a directory.
#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
    is_dir: bool,
}

impl TreeNode {
    fn insert(&mut self, relative_path: &str) {
        let mut node = self;
        for component in relative_path.split('/').filter(|c| !c.is_empty()) {
            node.is_dir = true;
            node = node.children.entry(component.to_string()).or_default();
        }
    }

    /// Children ordered directories first, then alphabetically.
    fn sorted_children(&self) -> Vec<(&String, &TreeNode)> {
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_by(|(a_name, a), (b_name, b)| match (a.is_dir, b.is_dir) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a_name.cmp(b_name),
        });
        entries
    }
}

/// Renders `paths` (relative, `/`-separated) as a tree rooted at `display_name`.
pub fn render_file_tree(display_name: &str, paths: &[&str]) -> Result<String> {
    let mut root = TreeNode::default();
    for path in paths {
        root.insert(path);
    }

    let mut output = String::new();
    writeln!(output, "{}{}/{}", BOLD_START, display_name, BOLD_END)
        .map_err(|e| anyhow!(e).context("Failed to write root directory name"))?;
    walk_and_build_string(&root, &mut String::new(), &mut output)
        .map_err(|e| anyhow!(e).context("Failed while generating file tree string"))?;
    Ok(output)
}

fn walk_and_build_string(
    node: &TreeNode,
    current_prefix: &mut String,
    output: &mut dyn FmtWrite,
) -> std::fmt::Result {
    let entries = node.sorted_children();
    let num_entries = entries.len();

    for (index, (name, child)) in entries.into_iter().enumerate() {
        let is_last_entry = index == num_entries - 1;
        let connector = if is_last_entry { ELBOW } else { TEE };

        if child.is_dir {
            writeln!(
                output,
                "{}{}{}{}/{}",
                current_prefix, connector, BOLD_START, name, BOLD_END
            )?;
            let prefix_component = if is_last_entry { SPACER } else { PIPE };
            current_prefix.push_str(prefix_component);
            walk_and_build_string(child, current_prefix, output)?;
            current_prefix.truncate(current_prefix.len() - prefix_component.len());
        } else {
            writeln!(output, "{}{}{}", current_prefix, connector, name)?;
        }
    }
    Ok(())
}
