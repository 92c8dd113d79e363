pub mod client;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod registry;

pub use client::api;
pub use descriptor::{Descriptor, Handler, Response, Route, Verb};
pub use dispatch::{ApiClient, UserApi};
pub use error::{ApiError, ConfigError, TransportError};
pub use registry::{api_modules, BuilderFn, MethodDef};
