//! Dispatch engine: turns the registry into a bound client.
//!
//! `ApiClient::build` walks the registry once, fails fast on configuration
//! defects, and keeps a builder per (module, method). Each call builds a
//! descriptor, pattern-matches on its variant (in-process handlers win over
//! the transport), and routes every failure through the error normalizer.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::model::{NewUser, User};
use crate::transport::Transport;

use super::descriptor::{Descriptor, Response};
use super::error::{ApiError, ConfigError};
use super::registry::{self, MethodDef};

/// Bound client: the registry shape, callable.
pub struct ApiClient {
    transport: Transport,
    methods: Vec<MethodDef>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("methods", &self.methods.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build the bound client from a registry and an injected transport.
    /// Registry defects abort construction; they are never surfaced per call.
    pub fn build(registry: &[MethodDef], transport: Transport) -> Result<Self, ConfigError> {
        registry::validate(registry)?;
        Ok(Self { transport, methods: registry.to_vec() })
    }

    /// Generic entry point: invoke `module.method` with JSON parameters.
    /// Typed wrappers run through here too, so both surfaces share one path.
    pub async fn invoke(
        &self,
        module: &str,
        method: &str,
        params: Value,
    ) -> Result<Response<Value>, ApiError> {
        let Some(def) = self
            .methods
            .iter()
            .find(|d| d.module == module && d.name == method)
        else {
            debug!("unknown api method {}.{}", module, method);
            return Err(ApiError::new(500, format!("unknown api method {module}.{method}")));
        };

        let descriptor = (def.builder)(params);
        debug!("dispatching {}", descriptor.route());

        match descriptor {
            // In-process handlers return the canonical shape already; the
            // normalizer passes their errors through unchanged.
            Descriptor::InProcess { handler, .. } => handler().await,
            Descriptor::Remote { route, body } => self
                .transport
                .send(&route, body.as_ref())
                .await
                .map_err(ApiError::from),
        }
    }

    /// The `user` module, typed to mirror its registry entries.
    pub fn user(&self) -> UserApi<'_> {
        UserApi { client: self }
    }
}

/// Typed view over the `user` module.
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl UserApi<'_> {
    /// GET /users: the full directory, order preserved.
    pub async fn get_users(&self) -> Result<Response<Vec<User>>, ApiError> {
        let response = self.client.invoke("user", "getUsers", Value::Null).await?;
        decode(response)
    }

    /// POST /users: create a record; the server assigns the id.
    pub async fn create_user(&self, payload: NewUser) -> Result<Response<User>, ApiError> {
        let params = serde_json::to_value(payload).map_err(|_| ApiError::unexpected())?;
        let response = self.client.invoke("user", "createUser", params).await?;
        decode(response)
    }
}

/// Decode the data payload; a malformed body is an unexpected failure.
fn decode<T: DeserializeOwned>(response: Response<Value>) -> Result<Response<T>, ApiError> {
    let Response { data, status, message } = response;
    let data = serde_json::from_value(data).map_err(|_| ApiError::unexpected())?;
    Ok(Response { data, status, message })
}
