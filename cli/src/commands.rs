use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::fixture;
use branding::build_tenant_data;
use branding::storage::FileStore;
use branding::tenant::validation::TenantIdValidator;
use branding::theme::cache::ThemeCache;
use branding::validation::Validator;
use std::path::Path;

/// Resolve a tenant's theme through the persistent cache and print it as
/// JSON. `--tenant` overrides the id carried by the fixture rows.
pub fn resolve(config: &AppConfig, file: &Path, tenant: Option<&str>) -> AppResult<()> {
    if let Some(id) = tenant {
        TenantIdValidator.validate(id)?;
    }

    let rows = fixture::load_rows(file)?;
    let tenant_id = tenant
        .map(str::to_string)
        .or_else(|| rows.tenant.id.clone());

    let cache = ThemeCache::new(FileStore::new(config.storage().dir()));
    match cache.resolve(rows.branding.as_ref(), tenant_id.as_deref()) {
        Some(theme) => print_json(&theme),
        None => {
            log::info!("No branding supplied; tenant has no theme");
            println!("null");
            Ok(())
        }
    }
}

/// Normalize fixture rows into a fully-defaulted tenant and print it as
/// JSON.
pub fn build(file: &Path) -> AppResult<()> {
    let rows = fixture::load_rows(file)?;
    let data = build_tenant_data(&rows.tenant, rows.branding.as_ref(), rows.features.as_ref());
    print_json(&data)
}

/// Remove a single tenant's cached theme entry.
pub fn clear(config: &AppConfig, tenant: Option<&str>) -> AppResult<()> {
    if let Some(id) = tenant {
        TenantIdValidator.validate(id)?;
    }

    let cache = ThemeCache::new(FileStore::new(config.storage().dir()));
    cache.clear(tenant)?;
    println!("Cleared cached theme for '{}'", tenant.unwrap_or("default"));
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Input(format!("Failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
