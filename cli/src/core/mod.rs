//! # Appneural Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the components the blueprint commands are built on.
//!
//! ## Architecture
//!
//! - `catalog`: The static table of blueprints and their literal file contents
//! - `generator`: Validates a target and writes a blueprint into it
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::catalog; // For listing and looking up blueprints
//! use crate::core::generator; // For writing a blueprint to disk
//! use crate::core::error::{AppneuralError, Result}; // For error handling
//! ```
//!
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
