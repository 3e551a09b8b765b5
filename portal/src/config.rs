//! # Portal Configuration
//!
//! Configuration loaded from environment variables, validated on startup to
//! fail fast if misconfigured.
//!
//! | Variable                      | Default                  |
//! |-------------------------------|--------------------------|
//! | `PORTAL_API_URL`              | `http://127.0.0.1:3001`  |
//! | `PORTAL_SERVICE_URL`          | value of `PORTAL_API_URL`|
//! | `PORTAL_API_VERSION`          | `v1`                     |
//! | `PORTAL_REQUEST_TIMEOUT_SECS` | `10`                     |
//! | `PORTAL_SESSION_FILE`         | `.portal/session.json`   |
//! | `PORTAL_LOG_DIR`              | `logs`                   |
//! | `RUST_LOG`                    | `portal=info,warn`       |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::AppError;

/// Origin of the generic API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";

/// Version used when a caller does not name one.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Portal client configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL used as-is by the generic API client
    pub api_url: String,
    /// Root under which `/service/{name}/{version}` is composed
    pub service_url: String,
    /// Default service version
    pub api_version: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Cookie jar holding the credential
    pub session_file: PathBuf,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "portal=debug,info")
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            service_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            session_file: PathBuf::from(".portal/session.json"),
            log_dir: PathBuf::from("logs"),
            log_level: "portal=info,warn".to_string(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let api_url = env::var("PORTAL_API_URL").unwrap_or(defaults.api_url);
        let service_url = env::var("PORTAL_SERVICE_URL").unwrap_or_else(|_| api_url.clone());

        let request_timeout = match env::var("PORTAL_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse().map_err(|e| {
                AppError::Config(format!("PORTAL_REQUEST_TIMEOUT_SECS must be a valid number: {}", e))
            })?),
            Err(_) => defaults.request_timeout,
        };

        Ok(Self {
            api_url,
            service_url,
            api_version: env::var("PORTAL_API_VERSION").unwrap_or(defaults.api_version),
            request_timeout,
            session_file: env::var("PORTAL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            log_dir: env::var("PORTAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    /// Validate configuration values.
    ///
    /// The client factory itself never checks URLs; a bad URL that slips
    /// past this surfaces as a request-time error instead.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, url) in [("PORTAL_API_URL", &self.api_url), ("PORTAL_SERVICE_URL", &self.service_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!("{} must be an http(s) URL, got {:?}", name, url)));
            }
        }

        if self.api_version.trim().is_empty() || self.api_version.contains('/') {
            return Err(AppError::Config("PORTAL_API_VERSION must be a single path segment".to_string()));
        }

        let secs = self.request_timeout.as_secs();
        if self.request_timeout.is_zero() || secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(AppError::Config(format!(
                "PORTAL_REQUEST_TIMEOUT_SECS must be between 1 and {}",
                MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        Ok(())
    }

    /// Configuration pointing both base URLs at `url`, for tests and embedders.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            service_url: url.clone(),
            api_url: url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PortalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.api_version, "v1");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = PortalConfig::with_base_url("localhost:3001");
        assert!(matches!(config.validate(), Err(AppError::Config(msg)) if msg.contains("PORTAL_API_URL")));
    }

    #[test]
    fn test_rejects_bad_version() {
        let config = PortalConfig {
            api_version: "v1/extra".to_string(),
            ..PortalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = PortalConfig {
            request_timeout: Duration::ZERO,
            ..PortalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_base_url_sets_both_urls() {
        let config = PortalConfig::with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.service_url, "http://127.0.0.1:9999");
    }
}
