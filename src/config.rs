//! Application configuration management.
//!
//! This module handles loading the application configuration, which holds
//! the backend base URL, an optional request timeout, and the notice texts
//! shown on the result and fee views.
//!
//! Configuration is stored at `~/.config/admission-lookup/config.json`.
//! `ADMISSION_API_URL` (from the environment or a `.env` file) overrides the
//! base URL.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application name used for config/log directory paths
const APP_NAME: &str = "admission-lookup";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "ADMISSION_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// Unset means requests may wait forever, like a browser fetch.
    pub request_timeout_secs: Option<u64>,
    pub notices: Notices,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            notices: Notices::default(),
        }
    }
}

/// Fixed copy shown on the result and fee views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notices {
    pub college_name: String,
    pub academic_session: String,
    pub admission_deadline: NaiveDateTime,
    pub payment_channel: String,
    pub contact_number: String,
}

impl Default for Notices {
    fn default() -> Self {
        let admission_deadline = NaiveDate::from_ymd_opt(2025, 8, 17)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_default();

        Self {
            college_name: "Notre Dame College".to_string(),
            academic_session: "2025-2026".to_string(),
            admission_deadline,
            payment_channel: "bKash Apps".to_string(),
            contact_number: "01847601600".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing or
    /// unreadable. The `ADMISSION_API_URL` override applies either way.
    pub fn load() -> Self {
        let mut config = match Self::read_file() {
            Ok(Some(contents)) => Self::parse_or_default(&contents),
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        };
        config.apply_env_override(std::env::var(API_URL_ENV).ok());
        config
    }

    fn read_file() -> Result<Option<String>> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn parse_or_default(contents: &str) -> Self {
        serde_json::from_str(contents).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid config file, using defaults");
            Self::default()
        })
    }

    fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn log_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_base_url": "https://results.example.edu"}"#)
            .expect("Failed to parse config test JSON");
        assert_eq!(config.api_base_url, "https://results.example.edu");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.notices, Notices::default());
    }

    #[test]
    fn test_notices_deadline_from_json() {
        let config: Config = serde_json::from_str(
            r#"{"notices": {"admission_deadline": "2026-01-05T17:30:00"}}"#,
        )
        .expect("Failed to parse config test JSON");
        assert_eq!(
            config.notices.admission_deadline.format("%Y-%m-%d %H:%M").to_string(),
            "2026-01-05 17:30"
        );
        assert_eq!(config.notices.college_name, "Notre Dame College");
    }

    #[test]
    fn test_invalid_file_still_takes_env_override() {
        let mut config = Config::parse_or_default("{ not json");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        config.apply_env_override(Some("https://results.example.edu".to_string()));
        assert_eq!(config.api_base_url, "https://results.example.edu");
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config.apply_env_override(Some("  http://10.0.0.2:8080 ".to_string()));
        assert_eq!(config.api_base_url, "http://10.0.0.2:8080");

        config.apply_env_override(Some("   ".to_string()));
        assert_eq!(config.api_base_url, "http://10.0.0.2:8080");

        config.apply_env_override(None);
        assert_eq!(config.api_base_url, "http://10.0.0.2:8080");
    }
}
