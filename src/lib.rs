//! # GitHub Languages CLI
//!
//! Looks up a GitHub user's public profile and the set of primary languages
//! across their public repositories, reading the GitHub token from Vault.
//!
//! ## Modules
//!
//! - [`app`] - Pipeline orchestration
//! - [`app_deps`] - Trait seams for the secret store and GitHub API
//! - [`config`] - Environment-based settings
//! - [`secrets`] - Vault KV v2 client
//! - [`github`] - GitHub REST client
//! - [`languages`] - Language aggregation
//! - [`report`] - Report rendering
//! - [`validation`] - Input validation utilities
//! - [`paths`] - `.env` discovery
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod errors;
pub mod github;
pub mod languages;
pub mod paths;
pub mod report;
pub mod secrets;
pub mod validation;
