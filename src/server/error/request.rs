use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::num::ParseIntError;
use thiserror::Error;

/// Malformed request input rejected before any store access.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Path id segment is not a decimal integer.
    #[error("Failed to parse ID from String '{value}': {source}")]
    InvalidId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Authorized body is missing a required field or has a field of the wrong type.
    #[error("Failed to read request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Project `type` is not one of the known integer codes.
    #[error("Unknown project type {0}")]
    InvalidProjectType(i32),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::InvalidId { .. } => "id must be a number",
            Self::InvalidBody(_) => "Invalid request body",
            Self::InvalidProjectType(_) => "type must be 0 (WEB) or 1 (IOS)",
        };

        (StatusCode::OK, body).into_response()
    }
}
