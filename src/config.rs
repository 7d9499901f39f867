use log::Level;
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://apis.ccbp.in";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BLOG_API_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, enable_logging: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Base URL of the blogs API, without trailing slash
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Console log level; unknown values fall back to `Info`
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::Info)
    }
}

// Static global configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
