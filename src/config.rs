//! Client configuration: transport mode, base address, request timeout.

use std::env;
use std::time::Duration;

/// Env var selecting mock vs live transport.
pub const API_MODE_ENV: &str = "USERDIR_API_MODE";
/// Env var overriding the live base address.
pub const BASE_URL_ENV: &str = "USERDIR_API_BASE_URL";

/// Default live backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
/// Fixed per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Which transport the client is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    #[default]
    Mock,
    Live,
}

impl ApiMode {
    /// Parse the env value. Unknown values fall back to mock, so a typo can
    /// never point a dev build at a live backend.
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" | "api" => ApiMode::Live,
            _ => ApiMode::Mock,
        }
    }
}

/// Configuration surface consumed by the client core.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub mode: ApiMode,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: ApiMode::Mock,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read mode and base address from the environment, defaulting the rest.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(mode) = env::var(API_MODE_ENV) {
            config.mode = ApiMode::parse(&mode);
        }
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }

    pub fn with_mode(mut self, mode: ApiMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(ApiMode::parse("mock"), ApiMode::Mock);
        assert_eq!(ApiMode::parse("live"), ApiMode::Live);
        assert_eq!(ApiMode::parse("API"), ApiMode::Live);
        assert_eq!(ApiMode::parse(" live "), ApiMode::Live);
        assert_eq!(ApiMode::parse("prod"), ApiMode::Mock);
    }

    #[test]
    fn test_from_env_overrides_mode_and_base_url() {
        env::set_var(API_MODE_ENV, "live");
        env::set_var(BASE_URL_ENV, "https://directory.example.com/api");
        let config = ClientConfig::from_env();
        env::remove_var(API_MODE_ENV);
        env::remove_var(BASE_URL_ENV);

        assert_eq!(config.mode, ApiMode::Live);
        assert_eq!(config.base_url, "https://directory.example.com/api");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.mode, ApiMode::Mock);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::default()
            .with_mode(ApiMode::Live)
            .with_base_url("https://directory.example.com/api")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.mode, ApiMode::Live);
        assert_eq!(config.base_url, "https://directory.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
