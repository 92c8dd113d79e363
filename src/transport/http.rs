//! Live HTTP transport over reqwest.

use anyhow::Context;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, trace};

use crate::api::descriptor::{Response, Route, Verb};
use crate::api::error::{ConfigError, TransportError};
use crate::config::ClientConfig;

/// HTTP transport bound to a base address with a fixed per-call timeout.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from config. An elapsed timeout surfaces as an
    /// unexpected failure, not a distinct error class.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute one request against the live backend.
    pub async fn send(
        &self,
        route: &Route,
        body: Option<&Value>,
    ) -> Result<Response<Value>, TransportError> {
        let url = self.request_url(&route.path);
        debug!("http request: {} {}", route.verb, url);

        let mut request = match route.verb {
            Verb::Get => self.client.get(&url),
            Verb::Post => self.client.post(&url),
            Verb::Put => self.client.put(&url),
            Verb::Delete => self.client.delete(&url),
        };
        // Read-only verbs never carry a payload, even if a descriptor has one.
        if route.verb.carries_body() {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        let response = request
            .send()
            .await
            .context("http request failed")
            .map_err(TransportError::Unexpected)?;

        let status = response.status();
        trace!("http response: {} {} -> {}", route.verb, url, status);

        if status.is_success() {
            let data: Value = response
                .json()
                .await
                .context("malformed response body")
                .map_err(TransportError::Unexpected)?;
            return Ok(Response::with_status(data, status.as_u16()));
        }

        // Surface a server-provided message when the error body has one.
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
        Err(TransportError::Status { status: status.as_u16(), message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000/api/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.request_url("/users"), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_request_url_joins_base_and_path() {
        let config = ClientConfig::default().with_base_url("https://directory.example.com");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.request_url("/users"), "https://directory.example.com/users");
    }
}
