use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::TokenDigest,
};

/// Shared-secret check for mutating routes.
///
/// The request body carries the secret in plain text as `token`; it is accepted when its
/// SHA-256 digest equals the configured digest.
pub struct TokenGuard<'a> {
    digest: &'a TokenDigest,
}

impl<'a> TokenGuard<'a> {
    pub fn new(digest: &'a TokenDigest) -> Self {
        Self { digest }
    }

    /// Checks the token taken from a request body.
    ///
    /// # Arguments
    /// - `token` - Value of the body's `token` field, `None` when absent
    ///
    /// # Returns
    /// - `Ok(())` - Token hashes to the configured digest
    /// - `Err(AuthError::MissingToken)` - No token supplied
    /// - `Err(AuthError::TokenMismatch)` - Token supplied but its digest differs
    pub fn require(&self, token: Option<&str>) -> Result<(), AppError> {
        let Some(token) = token else {
            return Err(AuthError::MissingToken.into());
        };

        if !self.digest.matches(token) {
            return Err(AuthError::TokenMismatch.into());
        }

        Ok(())
    }
}
