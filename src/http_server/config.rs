//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, any origin is mirrored)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Upper bound on the `/test` database probe, in seconds (default: 5)
    #[serde(default = "default_diagnostic_timeout_secs")]
    pub diagnostic_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_diagnostic_timeout_secs() -> u64 {
    5
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            diagnostic_timeout_secs: default_diagnostic_timeout_secs(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Reads `HOST`, `PORT`, `CORS_ORIGINS` and `DIAGNOSTIC_TIMEOUT_SECS`
    /// from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`. Unparseable values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: read("HOST").unwrap_or(defaults.host),
            port: read("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: read("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            diagnostic_timeout_secs: read("DIAGNOSTIC_TIMEOUT_SECS")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(defaults.diagnostic_timeout_secs),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn diagnostic_timeout(&self) -> Duration {
        Duration::from_secs(self.diagnostic_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.diagnostic_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_lookup() {
        let config = HttpServerConfig::from_lookup(|key| match key {
            "PORT" => Some("9001".to_string()),
            "CORS_ORIGINS" => Some("http://localhost:5173, https://shelter.example".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 9001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://shelter.example"]
        );
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = HttpServerConfig::from_lookup(|key| match key {
            "PORT" => Some("eighty".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8000);
    }
}
