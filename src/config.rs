//! Server configuration from environment variables

use std::env;
use std::time::Duration;

use crate::mtr::{DEFAULT_API_URL, DEFAULT_FETCH_TIMEOUT};

/// Runtime configuration, read once at startup.
///
/// Every knob has a default; malformed values fall back rather than abort.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind host (`MTR_MCP_HOST`, default `127.0.0.1`)
    pub host: String,
    /// Bind port (`MTR_MCP_PORT`, default `8000`)
    pub port: u16,
    /// Upstream schedule endpoint (`MTR_API_URL`)
    pub api_url: String,
    /// Upstream fetch bound (`MTR_FETCH_TIMEOUT_SECS`, default 10)
    pub fetch_timeout: Duration,
    /// Pause between heartbeat frames (`MTR_HEARTBEAT_SECS`, default 30)
    pub heartbeat_interval: Duration,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("MTR_MCP_HOST").unwrap_or(defaults.host),
            port: env::var("MTR_MCP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            api_url: env::var("MTR_API_URL").unwrap_or(defaults.api_url),
            fetch_timeout: env::var("MTR_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            heartbeat_interval: env::var("MTR_HEARTBEAT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.heartbeat_interval),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            heartbeat_interval: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.api_url.contains("rt.data.gov.hk"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.heartbeat_interval, Duration::from_secs(30));
    }
}
