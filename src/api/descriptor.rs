//! Request descriptors and the response envelope.
//!
//! A descriptor is an inert description of one API call, produced by a
//! registry builder and consumed by the dispatch engine. Remote descriptors
//! carry the route and optional body for a transport call; in-process
//! descriptors carry a handler that answers the call without touching the
//! transport. Both keep their route, so request metadata stays inspectable
//! either way.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// HTTP verbs understood by the dispatch engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Whether requests with this verb carry a payload.
    pub fn carries_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Verb + path pair identifying a request target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub verb: Verb,
    pub path: String,
}

impl Route {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self { verb, path: path.into() }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}

/// Response envelope returned by every bound method. `data` is mandatory,
/// the rest is advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: T,
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl<T> Response<T> {
    pub fn new(data: T) -> Self {
        Self { data, status: None, message: None }
    }

    pub fn with_status(data: T, status: u16) -> Self {
        Self { data, status: Some(status), message: None }
    }
}

/// In-process request handler: answers a call without a transport round trip.
pub type Handler = Box<dyn FnOnce() -> BoxFuture<'static, Result<Response<Value>, ApiError>> + Send>;

/// One API call, described but not yet executed.
pub enum Descriptor {
    /// Served by a transport call against `route`.
    Remote { route: Route, body: Option<Value> },
    /// Served by `handler`; the route is metadata only.
    InProcess { route: Route, handler: Handler },
}

impl Descriptor {
    pub fn remote(verb: Verb, path: impl Into<String>) -> Self {
        Descriptor::Remote { route: Route::new(verb, path), body: None }
    }

    pub fn remote_with_body(verb: Verb, path: impl Into<String>, body: Value) -> Self {
        Descriptor::Remote { route: Route::new(verb, path), body: Some(body) }
    }

    pub fn in_process<F, Fut>(verb: Verb, path: impl Into<String>, handler: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Response<Value>, ApiError>> + Send + 'static,
    {
        Descriptor::InProcess {
            route: Route::new(verb, path),
            handler: Box::new(move || -> BoxFuture<'static, Result<Response<Value>, ApiError>> {
                Box::pin(handler())
            }),
        }
    }

    /// Request metadata, present on both variants.
    pub fn route(&self) -> &Route {
        match self {
            Descriptor::Remote { route, .. } | Descriptor::InProcess { route, .. } => route,
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Remote { route, body } => f
                .debug_struct("Remote")
                .field("route", route)
                .field("body", body)
                .finish(),
            Descriptor::InProcess { route, .. } => f
                .debug_struct("InProcess")
                .field("route", route)
                .finish_non_exhaustive(),
        }
    }
}
