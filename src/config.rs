//! Configuration loading and constants.
//!
//! Reads application configuration from the process environment once at
//! startup. `AppConfig` holds the listen port and the deployed version
//! string; both fall back to defaults when their variable is unset.

use std::env;

// =============================================================================
// Environment Variables
// =============================================================================

/// TCP port to listen on
pub const ENV_PORT: &str = "PORT";

/// Version string identifying the deployed instance
pub const ENV_APP_VERSION: &str = "APP_VERSION";

// =============================================================================
// Defaults and Strings
// =============================================================================

/// Default listen port when PORT is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Default version string when APP_VERSION is not set
pub const DEFAULT_VERSION: &str = "v1";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "bluegreen=debug,tower_http=debug";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Version-bearing responses must be revalidated by upstream caches so a
/// blue/green swap behind the load balancer is visible immediately.
pub const CACHE_CONTROL_VERSIONED: &str = "no-cache";

/// Application configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP listener binds to
    pub port: u16,
    /// Version string served by both endpoints
    pub version: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(env::var(ENV_PORT).ok(), env::var(ENV_APP_VERSION).ok())
    }

    /// Resolve configuration from raw variable values.
    ///
    /// Unset and empty values fall back to defaults. A non-empty port value
    /// that does not parse as a TCP port is a configuration error.
    fn from_parts(port: Option<String>, version: Option<String>) -> Result<Self, ConfigError> {
        let port = match port.filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let version = version
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Ok(Self { port, version })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_parts(None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.version, DEFAULT_VERSION);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = AppConfig::from_parts(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.version, "v1");
    }

    #[test]
    fn configured_values_are_used() {
        let config =
            AppConfig::from_parts(Some("8080".to_string()), Some("v2-green".to_string())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.version, "v2-green");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_parts(Some("not-a-port".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = AppConfig::from_parts(Some("70000".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
