use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Mutating request carried no `token` field.
    #[error("Request did not include a token")]
    MissingToken,

    /// SHA-256 digest of the supplied token does not match the configured digest.
    #[error("Token digest does not match the configured digest")]
    TokenMismatch,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants answer with the plain-text body `Incorrect token` so clients cannot tell
/// a missing token from a wrong one.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected mutating request: {}", self);

        (StatusCode::OK, "Incorrect token").into_response()
    }
}
