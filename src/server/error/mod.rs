//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps domain-specific errors and implements
//! `IntoResponse` so handlers can return `Result<_, AppError>` directly. Every response body
//! produced here is plain text; clients are expected to read the message, not the status.

pub mod auth;
pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError, request::RequestError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Shared-secret check failed. Answers `Incorrect token`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request input could not be coerced. Answers with the validation message.
    #[error(transparent)]
    RequestErr(#[from] RequestError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener or log file I/O error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Operation failed; `message` is what the client sees.
    ///
    /// The wrapped source is only logged server-side.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches the client-facing message for a failed operation.
    ///
    /// Validation and authorization errors already carry their own response and are
    /// returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::AuthErr(_) | Self::RequestErr(_) | Self::Failed { .. } => self,
            source => Self::Failed {
                message: message.into(),
                source: Box::new(source),
            },
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - `Incorrect token` - For `AuthErr`
/// - Validation message - For `RequestErr`
/// - Operation message - For `Failed`, with the source logged at error level
/// - 500 Internal Server Error - For anything that reached the handler unwrapped
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::RequestErr(err) => err.into_response(),
            Self::Failed { message, source } => {
                tracing::error!("{}: {}", message, source);

                (StatusCode::OK, message).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
