//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": { "demoMode": false },
//!   "api": { "baseUrl": "http://localhost:5000", "timeoutSecs": 10 }
//! }
//! ```
//! Fields the CLI doesn't manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::http::{parse_base_url, DEFAULT_BASE_URL};

/// Environment variable overriding demo mode
pub const DEMO_MODE_ENV: &str = "CONTATOS_DEMO_MODE";
/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "CONTATOS_API_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    api: ApiSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Contatos configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    pub base_url: String,
    /// Request timeout; none by default
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Environment variables take precedence over the settings file:
    /// `CONTATOS_DEMO_MODE` and `CONTATOS_API_URL`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(data_dir)?;

        let demo_mode = match std::env::var(DEMO_MODE_ENV).ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or(raw.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Demo mode never builds an HTTP client, so only check the URL here
        // when it will be used
        if !demo_mode {
            parse_base_url(&base_url)?;
        }

        Ok(Self {
            demo_mode,
            base_url,
            timeout: raw.api.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        })
    }

    /// Save config to the data directory
    ///
    /// Only demo mode is written back; the backend settings are edited by
    /// hand and environment overrides are never persisted.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = read_settings(data_dir)?;
        settings.app.demo_mode = self.demo_mode;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Tests avoid the env overrides; the CLI integration covers those.

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.timeout, None);
        assert!(config.base_url.starts_with("http"));
    }

    #[test]
    fn test_reads_api_settings() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"api": {"baseUrl": "https://contatos.example.com", "timeoutSecs": 5}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        if std::env::var(API_URL_ENV).is_err() {
            assert_eq!(config.base_url, "https://contatos.example.com");
        }
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"api": {"baseUrl": "ftp://contatos.example.com"}}"#,
        )
        .unwrap();

        if std::env::var(API_URL_ENV).is_err() && std::env::var(DEMO_MODE_ENV).is_err() {
            assert!(Config::load(dir.path()).is_err());
        }
    }

    #[test]
    fn test_invalid_base_url_allowed_in_demo_mode() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"demoMode": true}, "api": {"baseUrl": "not a url"}}"#,
        )
        .unwrap();

        if std::env::var(API_URL_ENV).is_err() && std::env::var(DEMO_MODE_ENV).is_err() {
            let config = Config::load(dir.path()).unwrap();
            assert!(config.demo_mode);
            assert_eq!(config.base_url, "not a url");
        }
    }

    #[test]
    fn test_save_preserves_unknown_fields() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"demoMode": false, "theme": "dark"}, "api": {"timeoutSecs": 3}, "extra": 1}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.enable_demo_mode();
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("settings.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(saved["app"]["demoMode"], true);
        assert_eq!(saved["app"]["theme"], "dark");
        assert_eq!(saved["api"]["timeoutSecs"], 3);
        assert_eq!(saved["extra"], 1);
    }
}
