//! User directory API client.
//!
//! The crate turns a declarative module/method registry into a bound async
//! client. Requests run through a single transport seam that is either a
//! live HTTP backend or an in-process mock matching requests by verb and
//! path, and every failure mode is normalized into one `ApiError` shape.
//!
//! Application code obtains the process-wide client with [`api()`] and calls
//! the typed module surfaces:
//!
//! ```no_run
//! # async fn run() -> Result<(), userdir::ApiError> {
//! let client = userdir::api().expect("client configuration is valid");
//! let users = client.user().get_users().await?.data;
//! println!("{} users in the directory", users.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod model;
pub mod transport;

pub use api::client::api;
pub use api::descriptor::{Descriptor, Response, Route, Verb};
pub use api::dispatch::{ApiClient, UserApi};
pub use api::error::{ApiError, ConfigError, TransportError};
pub use config::{ApiMode, ClientConfig};
pub use model::{NewUser, RoleProfile, User};
