use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::server::error::config::ConfigError;

/// Reference SHA-256 digest that mutating requests must reproduce from their `token`.
#[derive(Clone)]
pub struct TokenDigest {
    /// Lowercase hex, 64 characters.
    hex: String,
}

impl TokenDigest {
    /// Parses a hex-encoded SHA-256 digest, as found in configuration.
    ///
    /// # Arguments
    /// - `name` - Name of the configuration variable, for error reporting
    /// - `value` - Hex digest, any case
    ///
    /// # Returns
    /// - `Ok(TokenDigest)` - Normalized digest
    /// - `Err(ConfigError::InvalidEnvVar)` - Not 64 hex characters
    pub fn from_hex(name: &str, value: &str) -> Result<Self, ConfigError> {
        let hex = value.trim().to_ascii_lowercase();

        if hex.len() != 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
                reason: "expected a 64 character hex SHA-256 digest".to_string(),
            });
        }

        Ok(Self { hex })
    }

    /// Builds the digest of a known secret.
    #[cfg(test)]
    pub fn of_secret(secret: &str) -> Self {
        Self {
            hex: hex_digest(secret),
        }
    }

    /// Returns whether `token` hashes to this digest, compared in constant time.
    pub fn matches(&self, token: &str) -> bool {
        hex_digest(token)
            .as_bytes()
            .ct_eq(self.hex.as_bytes())
            .into()
    }
}

impl std::fmt::Debug for TokenDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDigest").finish_non_exhaustive()
    }
}

fn hex_digest(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}
