//! # Dashboard Configuration
//!
//! Runtime settings loaded from an optional JSON file and environment overrides.
//!
//! Resolution order (later wins):
//!
//! 1. [`DashboardConfig::default`]
//! 2. JSON file at `$FX_DASHBOARD_CONFIG`, or `./fx-dashboard.json` when unset
//! 3. `FX_API_BASE_URL`, `FX_AUTO_REFRESH_SECS`, `FX_DEBOUNCE_MS`
//!
//! The configuration is read-only; the dashboard never writes it back.

use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use shared::CurrencyCode;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fx-dashboard.json";

/// Serializable dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the rate provider
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Attempts per provider call before giving up
    pub max_attempts: u32,
    /// Linear backoff step: attempt `i` waits `i * step`
    pub backoff_step_ms: u64,
    /// Quiet window for amount edits
    pub debounce_ms: u64,
    /// Auto-refresh interval
    pub auto_refresh_secs: u64,
    pub default_base: CurrencyCode,
    pub default_from: CurrencyCode,
    pub default_to: CurrencyCode,
    /// Initial text of the main amount field
    pub default_amount: String,
    /// Initial text of every quick-convert card
    pub quick_default_amount: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.frankfurter.app".to_string(),
            request_timeout_secs: 10,
            max_attempts: 3,
            backoff_step_ms: 1000,
            debounce_ms: 300,
            auto_refresh_secs: 60,
            default_base: CurrencyCode::from("USD"),
            default_from: CurrencyCode::from("USD"),
            default_to: CurrencyCode::from("TRY"),
            default_amount: "1".to_string(),
            quick_default_amount: "100".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load from the configured file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let config = Self::load_from_file(&path)?;
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a JSON file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `FX_*` environment variable overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var("FX_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(secs) = var("FX_AUTO_REFRESH_SECS").and_then(|v| v.parse().ok()) {
            self.auto_refresh_secs = secs;
        }
        if let Some(ms) = var("FX_DEBOUNCE_MS").and_then(|v| v.parse().ok()) {
            self.debounce_ms = ms;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn backoff_step(&self) -> Duration {
        Duration::from_millis(self.backoff_step_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Auto-refresh period; `auto_refresh_secs = 0` disables the timer.
    pub fn auto_refresh_interval(&self) -> Option<Duration> {
        (self.auto_refresh_secs > 0).then(|| Duration::from_secs(self.auto_refresh_secs))
    }
}

/// Path of the configuration file for this process.
pub fn config_path() -> PathBuf {
    std::env::var("FX_DASHBOARD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fx-dashboard-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.auto_refresh_interval(), Some(Duration::from_secs(60)));
        assert_eq!(config.default_to, CurrencyCode::from("TRY"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("fx-dashboard-does-not-exist.json");
        let config = DashboardConfig::load_from_file(&path).expect("defaults");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_file("partial", r#"{"debounce_ms": 150, "default_base": "EUR"}"#);
        let config = DashboardConfig::load_from_file(&path).expect("valid config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.default_base, CurrencyCode::from("EUR"));
        assert_eq!(config.auto_refresh_secs, 60);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = temp_file("malformed", "{ not json");
        let result = DashboardConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_overrides_apply_and_ignore_garbage() {
        let config = DashboardConfig::default().with_overrides(|key| match key {
            "FX_API_BASE_URL" => Some(" http://localhost:8080 ".to_string()),
            "FX_AUTO_REFRESH_SECS" => Some("300".to_string()),
            "FX_DEBOUNCE_MS" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.auto_refresh_secs, 300);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn test_zero_interval_disables_auto_refresh() {
        let config = DashboardConfig {
            auto_refresh_secs: 0,
            ..DashboardConfig::default()
        };
        assert_eq!(config.auto_refresh_interval(), None);
    }
}
