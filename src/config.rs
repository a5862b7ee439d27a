//! Configuration Module
//!
//! Loads service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default exchange-rate endpoint (INR base currency).
pub const DEFAULT_RATE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/INR";

/// Approximate INR→USD rate used whenever the live rate cannot be fetched.
pub const DEFAULT_FALLBACK_RATE: f64 = 0.012;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Exchange-rate endpoint queried by the rate cache
    pub rate_endpoint: String,
    /// Rate cache TTL in seconds
    pub rate_ttl: u64,
    /// Identity cache TTL in seconds
    pub identity_ttl: u64,
    /// INR→USD rate served when the upstream fetch fails
    pub fallback_rate: f64,
    /// HTTP client timeout for the rate endpoint, in seconds
    pub rate_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `RATE_ENDPOINT` - Exchange-rate URL (default: exchangerate-api INR)
    /// - `RATE_TTL` - Rate cache TTL in seconds (default: 3600)
    /// - `IDENTITY_TTL` - Identity cache TTL in seconds (default: 30)
    /// - `FALLBACK_RATE` - Fallback INR→USD rate (default: 0.012)
    /// - `RATE_TIMEOUT` - Rate request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            rate_endpoint: env::var("RATE_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.rate_endpoint),
            rate_ttl: env_or("RATE_TTL", defaults.rate_ttl),
            identity_ttl: env_or("IDENTITY_TTL", defaults.identity_ttl),
            fallback_rate: env::var("FALLBACK_RATE")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|rate| rate.is_finite() && *rate > 0.0)
                .unwrap_or(defaults.fallback_rate),
            rate_timeout: env_or("RATE_TIMEOUT", defaults.rate_timeout),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            rate_endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            rate_ttl: 3600,
            identity_ttl: 30,
            fallback_rate: DEFAULT_FALLBACK_RATE,
            rate_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.rate_endpoint, DEFAULT_RATE_ENDPOINT);
        assert_eq!(config.rate_ttl, 3600);
        assert_eq!(config.identity_ttl, 30);
        assert_eq!(config.fallback_rate, 0.012);
        assert_eq!(config.rate_timeout, 10);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("RATE_ENDPOINT");
        env::remove_var("RATE_TTL");
        env::remove_var("IDENTITY_TTL");
        env::remove_var("FALLBACK_RATE");
        env::remove_var("RATE_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.rate_endpoint, DEFAULT_RATE_ENDPOINT);
        assert_eq!(config.rate_ttl, 3600);
        assert_eq!(config.identity_ttl, 30);
        assert_eq!(config.fallback_rate, 0.012);
    }

    #[test]
    fn test_env_or_ignores_garbage() {
        env::set_var("GEMDESK_TEST_GARBAGE_PORT", "not-a-port");
        assert_eq!(env_or("GEMDESK_TEST_GARBAGE_PORT", 42u16), 42);
        env::remove_var("GEMDESK_TEST_GARBAGE_PORT");
    }
}
