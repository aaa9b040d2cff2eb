//! # Appneural Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! Thin wrappers over `dialoguer` prompts.
//!
use crate::core::error::Result;
use anyhow::Context;
use dialoguer::Input;
use std::io::IsTerminal;
use tracing::debug;

/// Returns `true` when stdin is attached to an interactive terminal.
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Asks for a line of input, pre-filled with `default`.
///
/// When stdin is not a terminal, `default` is returned without prompting.
/// Surrounding whitespace is trimmed; an empty answer yields `default`.
pub fn input_with_default(prompt: &str, default: &str) -> Result<String> {
    if !stdin_is_interactive() {
        debug!("stdin is not a terminal, using default '{}' for '{}'", default, prompt);
        return Ok(default.to_string());
    }

    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .with_context(|| format!("Failed to read input for '{}'", prompt))?;
    Ok(normalize_answer(&answer, default))
}

fn normalize_answer(answer: &str, default: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
