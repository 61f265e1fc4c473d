//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use crate::state::{PreferenceStore, Theme};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Env var overriding the backend base URL
pub const API_URL_ENV: &str = "CONTACT_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `http://localhost:3001/api`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Explicitly chosen theme; absent means follow the system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Backend URL: env var, then config file, then the built-in default
    pub fn resolve_api_base_url(&self) -> String {
        Self::pick_api_base_url(std::env::var(API_URL_ENV).ok(), self.api_base_url.clone())
    }

    fn pick_api_base_url(env_value: Option<String>, configured: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or(configured.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// Persists the theme choice inside the config file
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
}

impl FilePreferenceStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn update(&self, theme: Option<Theme>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut config = AppConfig::load_from(path)?;
        config.theme = theme;
        config.save_to(path)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>> {
        match &self.path {
            Some(path) => Ok(AppConfig::load_from(path)?.theme),
            None => Ok(None),
        }
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        tracing::debug!("Persisting theme preference: {}", theme.as_str());
        self.update(Some(theme))
    }

    fn clear_theme(&mut self) -> Result<()> {
        tracing::debug!("Clearing theme preference");
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            api_base_url: Some("http://example.test/api".to_string()),
            theme: Some(Theme::Dark),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""theme":"dark""#));
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"theme": "light", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, Some(Theme::Light));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            api_base_url: Some("http://localhost:9000/api".to_string()),
            theme: None,
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_api_base_url_precedence() {
        assert_eq!(
            AppConfig::pick_api_base_url(
                Some("http://env/api".into()),
                Some("http://file/api".into())
            ),
            "http://env/api"
        );
        assert_eq!(
            AppConfig::pick_api_base_url(None, Some("http://file/api".into())),
            "http://file/api"
        );
        assert_eq!(
            AppConfig::pick_api_base_url(Some("  ".into()), None),
            DEFAULT_BASE_URL
        );
    }

    mod preference_store {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_theme_slot_starts_empty() {
            let dir = TempDir::new().unwrap();
            let store = FilePreferenceStore::new(Some(dir.path().join("config.json")));
            assert_eq!(store.load_theme().unwrap(), None);
        }

        #[test]
        fn test_save_keeps_other_settings() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            AppConfig {
                api_base_url: Some("http://kept/api".to_string()),
                theme: None,
            }
            .save_to(&path)
            .unwrap();

            let mut store = FilePreferenceStore::new(Some(path.clone()));
            store.save_theme(Theme::Dark).unwrap();

            let config = AppConfig::load_from(&path).unwrap();
            assert_eq!(config.theme, Some(Theme::Dark));
            assert_eq!(config.api_base_url.as_deref(), Some("http://kept/api"));
        }

        #[test]
        fn test_clear_removes_theme() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            let mut store = FilePreferenceStore::new(Some(path.clone()));
            store.save_theme(Theme::Light).unwrap();
            store.clear_theme().unwrap();
            assert_eq!(store.load_theme().unwrap(), None);
            assert!(!fs::read_to_string(&path).unwrap().contains("theme"));
        }

        #[test]
        fn test_without_path_is_a_no_op() {
            let mut store = FilePreferenceStore::new(None);
            store.save_theme(Theme::Dark).unwrap();
            assert_eq!(store.load_theme().unwrap(), None);
        }
    }
}
