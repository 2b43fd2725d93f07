//! # Theme Resolution & Cache
//!
//! Derives concrete color themes from optional tenant branding and memoizes
//! the result in a local key-value store, keyed per tenant.
//!
//! ## Architecture
//!
//! - **[`resolver`]** - Pure derivation of a [`types::ResolvedTheme`] from a
//!   raw branding row, applying documented fallback colors for missing fields
//! - **[`cache`]** - Persistent, best-effort memoization wrapping the
//!   resolver, with purge of corrupt entries
//! - **[`types`]** - The resolved theme shape and its fallback color values
//!
//! ## Contract
//!
//! Resolution is pure and total: the same branding input always yields a
//! bit-identical theme, and every field of a resolved theme is populated.
//! Caching never changes a result, it only avoids recomputation. Persistence
//! failures degrade gracefully: a write error is logged and swallowed, a
//! corrupt entry is removed and recomputed. No failure in this module ever
//! reaches a theme consumer.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use branding::storage::MemoryStore;
//! use branding::tenant::types::TenantBranding;
//! use branding::theme::cache::ThemeCache;
//!
//! let cache = ThemeCache::new(MemoryStore::new());
//! let branding = TenantBranding {
//!     primary_color: Some("10 80% 50%".to_string()),
//!     ..Default::default()
//! };
//!
//! // First call computes and persists; later calls read the cached entry.
//! let theme = cache.resolve(Some(&branding), Some("acme-1"));
//! assert!(theme.is_some());
//!
//! // No branding means no theme.
//! assert!(cache.resolve(None, Some("acme-1")).is_none());
//! ```

pub mod cache;
pub mod resolver;
pub mod types;

pub use cache::ThemeCache;
pub use resolver::resolve_theme;
pub use types::ResolvedTheme;
