//! Response envelope unwrapping
//!
//! The backend wraps most payloads: lists come as `{ data: [...] }`, created
//! or updated entities as `{ data: entity }`, and the user as `{ user }`.
//! Some deployments return the bare payload, so both shapes are accepted.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::PfmResult;
use crate::models::User;

/// Body of a successful login or registration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

fn take_field(body: Value, field: &str) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key(field) => {
            map.remove(field).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Extract a list from `{ data: [...] }` or a bare array
///
/// Anything else (missing `data`, `data: null`, an object) yields an empty
/// list rather than an error.
pub fn list<T: DeserializeOwned>(body: Value) -> PfmResult<Vec<T>> {
    match take_field(body, "data") {
        items @ Value::Array(_) => Ok(serde_json::from_value(items)?),
        _ => Ok(Vec::new()),
    }
}

/// Extract an entity from `{ data: entity }` or a bare entity
pub fn entity<T: DeserializeOwned>(body: Value) -> PfmResult<T> {
    Ok(serde_json::from_value(take_field(body, "data"))?)
}

/// Extract the user from `{ user }` or a bare user
pub fn user(body: Value) -> PfmResult<User> {
    Ok(serde_json::from_value(take_field(body, "user"))?)
}
