use branding::storage::{FileStore, KeyValueStore};
use branding::tenant::types::{TenantBranding, TenantFeatures, TenantRow};
use branding::theme::types::fallback_colors;
use branding::{ResolvedTheme, ThemeCache, build_tenant_data};
use std::fs;
use tempfile::TempDir;

// Helper module for file-backed cache testing
mod store_helpers {
    use super::*;

    pub fn temp_store() -> (TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    pub fn branding_with_primary(primary: &str) -> TenantBranding {
        TenantBranding {
            primary_color: Some(primary.to_string()),
            ..Default::default()
        }
    }

    /// Overwrite the on-disk entry for a tenant with arbitrary text,
    /// bypassing the cache entirely.
    pub fn corrupt_entry(store: &FileStore, tenant_id: &str, text: &str) {
        let path = store
            .root()
            .join(format!("tenant-theme-{tenant_id}.json"));
        fs::write(path, text).expect("corrupting entry");
    }
}

use store_helpers::*;

mod cache_round_trip {
    use super::*;

    #[test]
    fn test_theme_survives_cache_instances() {
        let (dir, store) = temp_store();
        let branding = branding_with_primary("120 50% 40%");

        let written = ThemeCache::new(store)
            .resolve(Some(&branding), Some("t1"))
            .expect("theme resolved");

        // A fresh cache over the same directory reads the same entry
        let reread = ThemeCache::new(FileStore::new(dir.path()))
            .resolve(Some(&branding), Some("t1"))
            .expect("theme resolved");
        assert_eq!(written, reread);
    }

    #[test]
    fn test_entries_are_isolated_per_tenant() {
        let (_dir, store) = temp_store();
        let cache = ThemeCache::new(store);

        let t1 = cache
            .resolve(Some(&branding_with_primary("1 1% 1%")), Some("t1"))
            .expect("t1 theme");
        let t2 = cache
            .resolve(Some(&branding_with_primary("2 2% 2%")), Some("t2"))
            .expect("t2 theme");

        assert_eq!(t1.primary, "1 1% 1%");
        assert_eq!(t2.primary, "2 2% 2%");
    }

    #[test]
    fn test_absent_tenant_id_round_trips_under_default_key() {
        let (_dir, store) = temp_store();
        let cache = ThemeCache::new(store);

        let theme = cache
            .resolve(Some(&TenantBranding::default()), None)
            .expect("default theme");
        assert_eq!(theme, ResolvedTheme::default());

        let again = cache
            .resolve(Some(&TenantBranding::default()), None)
            .expect("cached default theme");
        assert_eq!(again, theme);
    }
}

mod corrupt_entries {
    use super::*;

    #[test]
    fn test_non_json_entry_is_replaced_on_next_read() {
        let (dir, store) = temp_store();
        let branding = branding_with_primary("120 50% 40%");
        let cache = ThemeCache::new(store);

        cache
            .resolve(Some(&branding), Some("t1"))
            .expect("initial resolve");
        corrupt_entry(&FileStore::new(dir.path()), "t1", "definitely not json");

        let theme = cache
            .resolve(Some(&branding), Some("t1"))
            .expect("recomputed theme");
        assert_eq!(theme.primary, "120 50% 40%");

        // Entry on disk is valid again
        let raw = FileStore::new(dir.path())
            .get("tenant-theme-t1")
            .expect("entry rewritten");
        let reparsed: ResolvedTheme = serde_json::from_str(&raw).expect("valid JSON");
        assert_eq!(reparsed, theme);
    }

    #[test]
    fn test_entry_missing_primary_is_treated_as_miss() {
        let (dir, store) = temp_store();
        let cache = ThemeCache::new(store);

        corrupt_entry(
            &FileStore::new(dir.path()),
            "t1",
            r#"{"background":"0 0% 100%"}"#,
        );

        let theme = cache
            .resolve(Some(&branding_with_primary("9 9% 9%")), Some("t1"))
            .expect("recomputed theme");
        assert_eq!(theme.primary, "9 9% 9%");
    }
}

mod clear_operation {
    use super::*;

    #[test]
    fn test_clear_removes_exactly_one_entry() {
        let (dir, store) = temp_store();
        let cache = ThemeCache::new(store);

        cache
            .resolve(Some(&branding_with_primary("1 1% 1%")), Some("t1"))
            .expect("t1");
        cache
            .resolve(Some(&branding_with_primary("2 2% 2%")), Some("t2"))
            .expect("t2");

        cache.clear(Some("t1")).expect("clear t1");

        let probe = FileStore::new(dir.path());
        assert!(probe.get("tenant-theme-t1").is_none());
        assert!(probe.get("tenant-theme-t2").is_some());
    }

    #[test]
    fn test_clear_on_empty_store_is_ok() {
        let (_dir, store) = temp_store();
        let cache = ThemeCache::new(store);
        assert!(cache.clear(Some("never-cached")).is_ok());
    }
}

// End-to-end: raw backend rows through the builder and into the cache
mod row_pipeline {
    use super::*;

    #[test]
    fn test_fixture_rows_resolve_and_cache() {
        let raw = r#"{
            "tenant": { "id": "acme-1", "name": "Acme Agro" },
            "branding": { "primary_color": "10 80% 50%" },
            "features": { "ai_chat": false }
        }"#;

        #[derive(serde::Deserialize)]
        struct Rows {
            tenant: TenantRow,
            branding: Option<TenantBranding>,
            features: Option<TenantFeatures>,
        }
        let rows: Rows = serde_json::from_str(raw).expect("fixture parses");

        let data = build_tenant_data(&rows.tenant, rows.branding.as_ref(), rows.features.as_ref());
        assert_eq!(data.id, "acme-1");
        assert!(!data.features.ai_chat);
        assert!(data.features.weather_forecast);

        let (_dir, store) = temp_store();
        let cache = ThemeCache::new(store);
        let theme = cache
            .resolve(rows.branding.as_ref(), Some(&data.id))
            .expect("theme resolved");
        assert_eq!(theme.primary, "10 80% 50%");
        assert_eq!(theme.secondary, fallback_colors::SECONDARY);
    }
}
