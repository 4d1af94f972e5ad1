//! Configuration management

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_URI: &str = "api.ukfast.io";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 90;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as the Authorization header
    pub api_key: Option<String>,

    /// API host, without scheme
    pub api_uri: String,

    /// Request timeout
    pub api_timeout_seconds: u64,

    /// Page size for list calls; 0 leaves it to the API
    pub api_pagination_perpage: u32,

    /// Output format
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "compact" => Ok(OutputFormat::Compact),
            other => Err(anyhow!(
                "Unsupported output format [{}]. Use table, json or compact",
                other
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_uri: DEFAULT_API_URI.to_string(),
            api_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            api_pagination_perpage: 0,
            output_format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        let config = Self::load_optional();

        if config.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(anyhow!("Authentication required. Set UKF_API_KEY"));
        }

        Ok(config)
    }

    /// Load configuration without requiring authentication
    pub fn load_optional() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_timeout_seconds = lookup("UKF_API_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.api_timeout_seconds);

        let api_pagination_perpage = lookup("UKF_API_PAGINATION_PERPAGE")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.api_pagination_perpage);

        // Unknown formats fall back to table
        let output_format = lookup("UKF_OUTPUT_FORMAT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            api_key: lookup("UKF_API_KEY"),
            api_uri: lookup("UKF_API_URI")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_uri),
            api_timeout_seconds,
            api_pagination_perpage,
            output_format,
        }
    }

    /// Base URL for API requests
    pub fn base_url(&self) -> String {
        let uri = self.api_uri.trim_end_matches('/');
        if uri.starts_with("http://") || uri.starts_with("https://") {
            uri.to_string()
        } else {
            format!("https://{}", uri)
        }
    }

    /// Get the authentication headers for API requests
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        match self.api_key {
            Some(ref key) => vec![("Authorization", key.clone())],
            None => vec![],
        }
    }

    /// Get config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Cannot determine config directory"))?
            .join("ukfast");

        Ok(dir)
    }
}
