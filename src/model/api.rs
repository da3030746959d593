use serde::{Deserialize, Serialize};

/// Body of mutating requests that carry nothing but the shared secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenDto {
    pub token: Option<String>,
}
