//! # Tenantry CLI Library
//!
//! Command-line front end for tenant branding resolution. The binary loads
//! raw tenant rows from a fixture file, normalizes them with the branding
//! library, resolves the tenant's theme through the persistent cache and
//! prints the results as JSON.
//!
//! ## Modules
//!
//! - [`commands`] - Subcommand implementations
//! - [`config`] - Configuration loading (`config.toml` + environment)
//! - [`error`] - Error types and result alias
//! - [`fixture`] - Tenant row fixture parsing (JSON or TOML)
//! - [`logger`] - Logging setup
//!
//! This library interface enables integration testing by providing access to
//! internal modules.

pub mod commands;
pub mod config;
pub mod error;
pub mod fixture;
pub mod logger;

// Re-export commonly used types for easier access in tests
pub use error::{AppError, AppResult};
