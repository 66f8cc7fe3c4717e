//! Configuration management for the catalog server
//!
//! A single `Config` is constructed at process start and passed to the
//! components that need it; there is no process-wide settings singleton.

use anyhow::Result;
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// MongoDB URL (default: mongodb://localhost:27017)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Database name (default: sitekit)
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// API key for admin operations. When unset, every admin-gated request
    /// is rejected.
    pub admin_api_key: Option<String>,

    /// CORS allowed origins (comma-separated). If empty, any origin is
    /// allowed (dev mode).
    pub cors_allowed_origins: Option<String>,

    /// Directory for uploaded service images (default: ./data/uploads/services)
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Public URL prefix under which uploads are served
    /// (default: /uploads/services)
    #[serde(default = "default_upload_url_prefix")]
    pub upload_url_prefix: String,

    /// Maximum number of services returned by a catalog listing
    /// (default: 100)
    #[serde(default = "default_max_list_results")]
    pub max_list_results: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database_name() -> String {
    "sitekit".to_string()
}

fn default_upload_dir() -> String {
    "./data/uploads/services".to_string()
}

fn default_upload_url_prefix() -> String {
    "/uploads/services".to_string()
}

fn default_max_list_results() -> i64 {
    100
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("SITEKIT_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("SITEKIT_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_port);
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("MONGODB_URI"))
            .unwrap_or_else(|_| default_database_url());
        let database_name = std::env::var("DATABASE_NAME")
            .or_else(|_| std::env::var("DB_NAME"))
            .unwrap_or_else(|_| default_database_name());
        let admin_api_key = std::env::var("ADMIN_API_KEY").ok();
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS").ok();
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| default_upload_dir());
        let upload_url_prefix =
            std::env::var("UPLOAD_URL_PREFIX").unwrap_or_else(|_| default_upload_url_prefix());
        let max_list_results = std::env::var("MAX_LIST_RESULTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_max_list_results);

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            admin_api_key,
            cors_allowed_origins,
            upload_dir,
            upload_url_prefix,
            max_list_results,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            database_name: default_database_name(),
            admin_api_key: None,
            cors_allowed_origins: None,
            upload_dir: default_upload_dir(),
            upload_url_prefix: default_upload_url_prefix(),
            max_list_results: default_max_list_results(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_name, "sitekit");
        assert_eq!(config.max_list_results, 100);
        assert_eq!(config.upload_url_prefix, "/uploads/services");
        assert!(config.admin_api_key.is_none());
    }
}
