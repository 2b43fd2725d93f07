use super::resolver::resolve_theme;
use super::types::{ResolvedTheme, fallback_colors};
use crate::error::StoreError;
use crate::storage::KeyValueStore;
use crate::tenant::types::{DEFAULT_TENANT_KEY, TenantBranding};
use serde::Deserialize;

const CACHE_KEY_PREFIX: &str = "tenant-theme-";

/// Partial shape used to vet persisted entries before trusting them.
///
/// An entry is trusted only when `primary` and `background` are present.
/// The remaining fields are deliberately not checked; a trusted entry
/// missing one of them is backfilled with the documented default so the
/// resolved-theme invariant still holds.
#[derive(Deserialize)]
struct CachedTheme {
    primary: Option<String>,
    secondary: Option<String>,
    accent: Option<String>,
    background: Option<String>,
    foreground: Option<String>,
}

impl CachedTheme {
    fn into_theme(self) -> ResolvedTheme {
        ResolvedTheme {
            primary: self
                .primary
                .unwrap_or_else(|| fallback_colors::PRIMARY.to_string()),
            secondary: self
                .secondary
                .unwrap_or_else(|| fallback_colors::SECONDARY.to_string()),
            accent: self
                .accent
                .unwrap_or_else(|| fallback_colors::ACCENT.to_string()),
            background: self
                .background
                .unwrap_or_else(|| fallback_colors::BACKGROUND.to_string()),
            foreground: self
                .foreground
                .unwrap_or_else(|| fallback_colors::FOREGROUND.to_string()),
        }
    }
}

/// Persistent, best-effort memoization wrapping the theme resolver.
///
/// Owns its store and is constructed explicitly at the composition root;
/// there is no global instance. Entries are keyed
/// `tenant-theme-<tenantId-or-"default">` and hold the serialized theme as
/// JSON text.
pub struct ThemeCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemeCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Cache key for a tenant, substituting the sentinel when no id is given.
    pub fn cache_key(tenant_id: Option<&str>) -> String {
        format!(
            "{CACHE_KEY_PREFIX}{}",
            tenant_id.unwrap_or(DEFAULT_TENANT_KEY)
        )
    }

    /// Resolve a tenant's theme, reading the cached entry when it is valid
    /// and computing plus persisting a fresh one otherwise.
    ///
    /// An absent branding row means "no theme": `None` is returned and the
    /// store is not touched. A store write failure is logged and swallowed;
    /// the computed theme is still returned. Repeated calls with the same
    /// input yield identical themes whether or not the cache is hit.
    pub fn resolve(
        &self,
        branding: Option<&TenantBranding>,
        tenant_id: Option<&str>,
    ) -> Option<ResolvedTheme> {
        branding?;

        let key = Self::cache_key(tenant_id);
        if let Some(theme) = self.read_cached(&key) {
            log::debug!("Theme cache hit for '{key}'");
            return Some(theme);
        }

        let theme = resolve_theme(branding)?;
        self.persist(&key, &theme);
        Some(theme)
    }

    /// Remove a single tenant's cached entry. Other tenants are unaffected.
    pub fn clear(&self, tenant_id: Option<&str>) -> Result<(), StoreError> {
        let key = Self::cache_key(tenant_id);
        self.store.remove(&key)?;
        log::info!("Cleared cached theme for '{key}'");
        Ok(())
    }

    /// Read path: a parse failure, or a parsed entry failing the required
    /// field check, counts as a miss and purges the entry.
    fn read_cached(&self, key: &str) -> Option<ResolvedTheme> {
        let raw = self.store.get(key)?;

        match serde_json::from_str::<CachedTheme>(&raw) {
            Ok(entry) if entry.primary.is_some() && entry.background.is_some() => {
                Some(entry.into_theme())
            }
            _ => {
                log::debug!("Discarding invalid cached theme at '{key}'");
                if let Err(e) = self.store.remove(key) {
                    log::warn!("Failed to purge invalid cache entry '{key}': {e}");
                }
                None
            }
        }
    }

    /// Write path: persistence is best-effort, never a correctness
    /// requirement.
    fn persist(&self, key: &str, theme: &ResolvedTheme) {
        match serde_json::to_string(theme) {
            Ok(raw) => {
                if let Err(e) = self.store.set(key, &raw) {
                    log::warn!("Failed to persist theme for '{key}': {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize theme for '{key}': {e}"),
        }
    }
}
