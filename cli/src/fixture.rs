use crate::error::{AppError, AppResult};
use branding::tenant::types::{TenantBranding, TenantFeatures, TenantRow};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw backend rows for a single tenant, as read from a fixture file.
///
/// Mirrors what a tenant lookup returns: an identity row plus optional
/// branding and feature rows. Missing sections stay absent so the defaulting
/// rules in the branding library apply exactly as they would against the
/// live backend.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TenantRows {
    pub tenant: TenantRow,
    pub branding: Option<TenantBranding>,
    pub features: Option<TenantFeatures>,
}

/// Load tenant rows from a JSON or TOML fixture file, chosen by extension.
pub fn load_rows(path: &Path) -> AppResult<TenantRows> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Input(format!(
            "Failed to read fixture file '{}': {e}",
            path.display()
        ))
    })?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            AppError::Input(format!(
                "Failed to parse TOML fixture '{}': {e}",
                path.display()
            ))
        }),
        _ => serde_json::from_str(&content).map_err(|e| {
            AppError::Input(format!(
                "Failed to parse JSON fixture '{}': {e}",
                path.display()
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fixture_with_partial_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tenant.json");
        fs::write(
            &path,
            r#"{"tenant":{"id":"t1"},"branding":{"primary_color":"1 2% 3%"}}"#,
        )
        .expect("write fixture");

        let rows = load_rows(&path).expect("fixture parses");
        assert_eq!(rows.tenant.id.as_deref(), Some("t1"));
        assert_eq!(
            rows.branding.expect("branding present").primary_color,
            Some("1 2% 3%".to_string())
        );
        assert!(rows.features.is_none());
    }

    #[test]
    fn test_toml_fixture() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tenant.toml");
        fs::write(
            &path,
            "[tenant]\nid = \"t1\"\nname = \"Acme Agro\"\n\n[features]\nai_chat = false\n",
        )
        .expect("write fixture");

        let rows = load_rows(&path).expect("fixture parses");
        assert_eq!(rows.tenant.name.as_deref(), Some("Acme Agro"));
        assert_eq!(
            rows.features.expect("features present").ai_chat,
            Some(false)
        );
    }

    #[test]
    fn test_missing_file_is_an_input_error() {
        let result = load_rows(Path::new("/nonexistent/tenant.json"));
        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[test]
    fn test_malformed_json_is_an_input_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write fixture");

        let result = load_rows(&path);
        assert!(matches!(result, Err(AppError::Input(_))));
    }
}
