use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

pub const API_URL_ENV: &str = "BANKDASH_API_URL";
pub const USE_MOCK_ENV: &str = "BANKDASH_USE_MOCK";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DataSourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Serve canned fixtures instead of calling `base_url`.
    #[serde(default = "default_true")]
    pub use_mock: bool,
    /// Delay fixture responses the way a real backend would.
    #[serde(default = "default_true")]
    pub simulate_latency: bool,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        DataSourceConfig {
            base_url: default_base_url(),
            use_mock: true,
            simulate_latency: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RefreshConfig {
    #[serde(default = "default_dashboard_interval")]
    pub dashboard_interval_ms: u64,
    #[serde(default = "default_transactions_interval")]
    pub transactions_interval_ms: u64,
    #[serde(default = "default_stream_interval")]
    pub stream_interval_ms: u64,
}

impl RefreshConfig {
    pub fn dashboard_interval(&self) -> Duration {
        Duration::from_millis(self.dashboard_interval_ms)
    }

    pub fn transactions_interval(&self) -> Duration {
        Duration::from_millis(self.transactions_interval_ms)
    }

    pub fn stream_interval(&self) -> Duration {
        Duration::from_millis(self.stream_interval_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        RefreshConfig {
            dashboard_interval_ms: default_dashboard_interval(),
            transactions_interval_ms: default_transactions_interval(),
            stream_interval_ms: default_stream_interval(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data_source: DataSourceConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default = "default_customer_id")]
    pub default_customer_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_source: DataSourceConfig::default(),
            refresh: RefreshConfig::default(),
            default_customer_id: default_customer_id(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_true() -> bool {
    true
}

fn default_dashboard_interval() -> u64 {
    5000
}

fn default_transactions_interval() -> u64 {
    3000
}

fn default_stream_interval() -> u64 {
    5000
}

fn default_customer_id() -> String {
    "C123456".to_string()
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file exists there. Environment overrides are applied last.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            debug!(path = %config_path.display(), "No config file, using defaults");
            Self::default()
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "bankdash", "bankdash")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Applies `BANKDASH_API_URL` / `BANKDASH_USE_MOCK` from `lookup`.
    /// Only the literal `false` disables fixtures.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.is_empty()) {
            debug!(%url, "Overriding API base URL from environment");
            self.data_source.base_url = url;
        }
        if let Some(flag) = lookup(USE_MOCK_ENV) {
            self.data_source.use_mock = flag != "false";
        }
        self
    }
}
