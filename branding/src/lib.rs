//! # Tenantry Branding Library
//!
//! Core library for multi-tenant branding resolution and theme caching.
//! This library normalizes raw tenant rows coming from an external backend
//! into fully-defaulted shapes, derives concrete color themes from optional
//! branding, and memoizes resolved themes in a local key-value store.
//!
//! ## Features
//!
//! - Normalization of partial tenant, branding and feature-flag rows with
//!   explicit defaults for every field
//! - Pure, total theme resolution with documented fallback colors
//! - Best-effort persistent theme caching keyed per tenant, with purge of
//!   corrupt entries
//! - Pluggable key-value storage backends (in-memory and file-based)
//! - Input validation for tenant identifiers at application boundaries
//!
//! ## Modules
//!
//! - [`error`] - Storage error types
//! - [`storage`] - Key-value store trait and backends
//! - [`tenant`] - Raw row types, validation and the tenant data builder
//! - [`theme`] - Resolved theme types, resolver and cache
//! - [`validation`] - Input validation trait
//!
//! This library interface enables integration testing by providing access to
//! internal modules.

pub mod error;
pub mod storage;
pub mod tenant;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access
pub use error::StoreError;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tenant::builder::build_tenant_data;
pub use tenant::types::{SimpleTenantData, TenantBranding, TenantFeatures, TenantRow};
pub use theme::cache::ThemeCache;
pub use theme::resolver::resolve_theme;
pub use theme::types::ResolvedTheme;

// Re-export validation trait for broader use
pub use validation::Validator;
