//! Transport seam shared by live and mock execution.
//!
//! The dispatch engine sends every remote descriptor through one `send`
//! call; whether that reaches the network or an in-process responder table
//! is decided once, when the client is constructed.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{register_user_handlers, MockTransport, Responder, UserStore};

use serde_json::Value;

use crate::api::descriptor::{Response, Route};
use crate::api::error::TransportError;

/// Transport strategy, chosen at client construction time.
pub enum Transport {
    Http(HttpTransport),
    Mock(MockTransport),
}

impl Transport {
    /// Execute one request. Mock and live are indistinguishable to callers
    /// except through response content.
    pub async fn send(
        &self,
        route: &Route,
        body: Option<&Value>,
    ) -> Result<Response<Value>, TransportError> {
        match self {
            Transport::Http(http) => http.send(route, body).await,
            Transport::Mock(mock) => mock.send(route, body).await,
        }
    }
}
