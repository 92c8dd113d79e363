//! Module/method registry.
//!
//! Every API method is one `MethodDef` naming its module, its method, and a
//! pure builder from call parameters to a descriptor. The dispatch engine
//! iterates this table generically, so adding an endpoint means adding one
//! entry here and nothing else.

use std::collections::HashSet;

use serde_json::Value;

use super::descriptor::{Descriptor, Verb};
use super::error::ConfigError;

/// Pure constructor from call parameters to a request descriptor.
/// Performs no I/O.
pub type BuilderFn = fn(Value) -> Descriptor;

/// One (module, method) entry in the registry.
#[derive(Clone, Copy)]
pub struct MethodDef {
    pub module: &'static str,
    pub name: &'static str,
    pub builder: BuilderFn,
}

/// Path of the user collection endpoint.
pub const USERS_PATH: &str = "/users";

fn get_users(_params: Value) -> Descriptor {
    Descriptor::remote(Verb::Get, USERS_PATH)
}

fn create_user(params: Value) -> Descriptor {
    Descriptor::remote_with_body(Verb::Post, USERS_PATH, params)
}

const API_MODULES: &[MethodDef] = &[
    MethodDef { module: "user", name: "getUsers", builder: get_users },
    MethodDef { module: "user", name: "createUser", builder: create_user },
];

/// The production registry: one `user` module with two methods.
pub fn api_modules() -> &'static [MethodDef] {
    API_MODULES
}

/// Reject duplicate (module, method) keys. Last-write-wins would mask a
/// registry mistake, so duplicates are a build-time configuration error.
pub fn validate(registry: &[MethodDef]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for def in registry {
        if !seen.insert((def.module, def.name)) {
            return Err(ConfigError::DuplicateMethod {
                module: def.module.to_string(),
                method: def.name.to_string(),
            });
        }
    }
    Ok(())
}
