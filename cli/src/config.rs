use crate::error::{AppError, AppResult};
use branding::storage::FileStore;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration.
///
/// Loaded once at startup and passed by reference to every collaborator
/// that needs it; there is no global configuration state.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    storage: StorageConfig,
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Theme store location configuration
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Store root: configured directory, then the platform data directory,
    /// then a local fallback for environments without one.
    pub fn dir(&self) -> PathBuf {
        self.dir
            .clone()
            .or_else(FileStore::default_root)
            .unwrap_or_else(|| PathBuf::from(".tenantry-cache"))
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// Load configuration from `config.toml` (optional) layered with environment
/// variables (separator `__`, e.g. `STORAGE__DIR`, `LOGGING__LEVEL`).
pub fn load_config() -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let file_source = File::with_name("config.toml").required(false);
    let env_source = Environment::default().separator("__");

    let config = Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values when present
        .build()
        .map_err(|e| {
            AppError::Config(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ))
        })?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_configured() {
        let config = AppConfig::default();
        assert_eq!(config.logging().level(), "info");
        assert!(config.logging().file().is_none());
        // Some directory is always resolvable
        assert!(!config.storage().dir().as_os_str().is_empty());
    }

    #[test]
    fn test_configured_dir_wins() {
        let storage = StorageConfig {
            dir: Some(PathBuf::from("/tmp/themes")),
        };
        assert_eq!(storage.dir(), PathBuf::from("/tmp/themes"));
    }
}
