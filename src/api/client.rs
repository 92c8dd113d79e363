//! Client construction and the process-wide singleton.
//!
//! `api()` builds the bound client at most once, on first access, and hands
//! out the same instance for the life of the process. Construction failures
//! are cached the same way: a broken configuration fails every call
//! identically instead of being silently retried.

use std::sync::OnceLock;

use tracing::debug;

use crate::config::{ApiMode, ClientConfig};
use crate::transport::{register_user_handlers, HttpTransport, MockTransport, Transport, UserStore};

use super::dispatch::ApiClient;
use super::error::ConfigError;
use super::registry::api_modules;

static CLIENT: OnceLock<Result<ApiClient, ConfigError>> = OnceLock::new();

impl ApiClient {
    /// Build a client for the configured mode. Mock mode registers the user
    /// responders over a fresh empty store; live mode targets `base_url`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = match config.mode {
            ApiMode::Mock => {
                let mut mock = MockTransport::new();
                register_user_handlers(&mut mock, UserStore::default())?;
                Transport::Mock(mock)
            }
            ApiMode::Live => Transport::Http(HttpTransport::new(config)?),
        };
        ApiClient::build(api_modules(), transport)
    }
}

/// The process-wide client, built on first access from the environment.
///
/// Initialization runs at most once even when the first callers race, so
/// mock responders register exactly once per process.
pub fn api() -> Result<&'static ApiClient, ConfigError> {
    CLIENT
        .get_or_init(|| {
            let config = ClientConfig::from_env();
            debug!("building api client in {:?} mode", config.mode);
            ApiClient::from_config(&config)
        })
        .as_ref()
        .map_err(Clone::clone)
}
