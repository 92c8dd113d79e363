//! In-process mock transport.
//!
//! Responders are matched by verb and path at the same seam the HTTP
//! transport uses, so the dispatch engine and the error normalizer cannot
//! tell the two apart. Unmatched requests answer 404 the way a live backend
//! would; an explicit passthrough transport can be installed instead for
//! partial mocking.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::debug;

use crate::api::descriptor::{Response, Route, Verb};
use crate::api::error::{ConfigError, TransportError};
use crate::api::registry::USERS_PATH;
use crate::model::{NewUser, RoleProfile, User};

use super::http::HttpTransport;

/// Responder for one verb+path pair. Receives the decoded request body.
pub type Responder =
    Box<dyn Fn(Option<&Value>) -> Result<Response<Value>, TransportError> + Send + Sync>;

struct MockRoute {
    route: Route,
    responder: Responder,
}

/// Mock transport: a responder table consulted instead of the network.
#[derive(Default)]
pub struct MockTransport {
    routes: Vec<MockRoute>,
    passthrough: Option<HttpTransport>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward unmatched requests to a live transport instead of answering
    /// 404. Opt-in; never the default.
    pub fn with_passthrough(mut self, transport: HttpTransport) -> Self {
        self.passthrough = Some(transport);
        self
    }

    /// Register a responder. A second responder for the same verb+path is a
    /// configuration error, not a silent override.
    pub fn register<F>(&mut self, verb: Verb, path: &str, responder: F) -> Result<(), ConfigError>
    where
        F: Fn(Option<&Value>) -> Result<Response<Value>, TransportError> + Send + Sync + 'static,
    {
        let route = Route::new(verb, path);
        if self.routes.iter().any(|r| r.route == route) {
            return Err(ConfigError::DuplicateResponder {
                verb: verb.to_string(),
                path: path.to_string(),
            });
        }
        self.routes.push(MockRoute { route, responder: Box::new(responder) });
        Ok(())
    }

    /// Execute one request against the responder table.
    pub async fn send(
        &self,
        route: &Route,
        body: Option<&Value>,
    ) -> Result<Response<Value>, TransportError> {
        if let Some(matched) = self.routes.iter().find(|r| r.route == *route) {
            debug!("mock hit: {}", route);
            return (matched.responder)(body);
        }
        match &self.passthrough {
            Some(http) => http.send(route, body).await,
            None => {
                debug!("mock miss: {}", route);
                Err(TransportError::Status {
                    status: 404,
                    message: Some(format!("no responder for {route}")),
                })
            }
        }
    }
}

/// Shared in-memory user collection backing the mock responders.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Arc::new(Mutex::new(users)) }
    }

    /// The canned dataset mock mode ships for manual runs.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// Current contents, order preserved.
    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// Assign the next id and append in one step. The id comes from the
    /// state before insertion, so a record never feeds its own id.
    pub fn create(&self, payload: NewUser) -> User {
        let mut users = self.users.lock().unwrap();
        let id = next_id(&users);
        let user = payload.into_user(id);
        users.push(user.clone());
        user
    }
}

/// `max(existing ids) + 1`, or 1 for an empty collection.
fn next_id(users: &[User]) -> u64 {
    users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
}

/// Install the user module responders over `store`.
pub fn register_user_handlers(
    mock: &mut MockTransport,
    store: UserStore,
) -> Result<(), ConfigError> {
    let list_store = store.clone();
    mock.register(Verb::Get, USERS_PATH, move |_body| {
        let users = list_store.snapshot();
        if users.is_empty() {
            return Err(TransportError::Status {
                status: 404,
                message: Some("no user records found".to_string()),
            });
        }
        let data = serde_json::to_value(users).map_err(|e| TransportError::Unexpected(e.into()))?;
        Ok(Response::with_status(data, 200))
    })?;

    mock.register(Verb::Post, USERS_PATH, move |body| {
        let Some(body) = body else {
            return Err(TransportError::Status {
                status: 400,
                message: Some("request body required".to_string()),
            });
        };
        let payload: NewUser = serde_json::from_value(body.clone()).map_err(|_| {
            TransportError::Status {
                status: 400,
                message: Some("malformed user payload".to_string()),
            }
        })?;
        let user = store.create(payload);
        let data = serde_json::to_value(&user).map_err(|e| TransportError::Unexpected(e.into()))?;
        Ok(Response::with_status(data, 201))
    })?;

    Ok(())
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Sato".to_string(),
            email: "sato@example.com".to_string(),
            age: 26,
            post_code: "123-4567".to_string(),
            phone: "012-3456-7890".to_string(),
            hobbies: vec!["running".to_string(), "chess".to_string()],
            url: "https://example.com/sato".to_string(),
            profile: RoleProfile::Student {
                study_minutes: 120,
                task_code: 101,
                score: 68,
                study_langs: vec!["Rust".to_string(), "TypeScript".to_string()],
            },
        },
        User {
            id: 2,
            name: "Suzuki".to_string(),
            email: "suzuki@example.com".to_string(),
            age: 31,
            post_code: "765-4321".to_string(),
            phone: "098-7654-3210".to_string(),
            hobbies: vec!["climbing".to_string()],
            url: "https://example.com/suzuki".to_string(),
            profile: RoleProfile::Mentor {
                experience_days: 1850,
                available_start_code: 201,
                available_end_code: 302,
                use_langs: vec!["Rust".to_string(), "Go".to_string()],
            },
        },
    ]
}
