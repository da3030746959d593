//! HTTP request handlers.
//!
//! Handlers coerce the path id, check the token on mutating routes, convert DTOs into
//! parameters and call the service layer. Failures are answered with a route-specific
//! plain-text message through `AppError::with_message`.

pub mod project;
pub mod timeline;

#[cfg(test)]
mod test;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::server::{
    error::{request::RequestError, AppError},
    middleware::auth::TokenGuard,
    model::access::AccessType,
    state::AppState,
    util::parse::parse_id,
};

/// Body returned by delete routes.
pub const DELETE_SUCCESS: &str = "Success";

fn log_received(access: AccessType, kind: &str) {
    tracing::info!("{} received for type {} on server", access, kind);
}

/// Checks the body's `token` and only then reads the rest of the body as `T`.
///
/// A `token` that is absent or not a string counts as missing.
fn authorized_body<T: DeserializeOwned>(state: &AppState, body: Value) -> Result<T, AppError> {
    let token = body.get("token").and_then(Value::as_str);
    TokenGuard::new(&state.token_digest).require(token)?;

    serde_json::from_value(body).map_err(|e| RequestError::InvalidBody(e).into())
}

/// `GET` on a `newEntry` path is a lookup by the id `newEntry`, which is never a number.
pub async fn get_new_entry() -> Result<(), AppError> {
    log_received(AccessType::Get, "Entry");

    parse_id("newEntry").map(|_| ())
}

/// Serializes `value` as JSON, or answers with an empty body when there is nothing to return.
fn json_or_empty<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => ().into_response(),
    }
}
