//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` wraps a pool and
//! `TokenDigest` is a short string.

use sea_orm::DatabaseConnection;

use crate::server::model::auth::TokenDigest;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by all requests.
    pub db: DatabaseConnection,

    /// Reference digest checked by `TokenGuard` on mutating routes.
    pub token_digest: TokenDigest,
}

impl AppState {
    pub fn new(db: DatabaseConnection, token_digest: TokenDigest) -> Self {
        Self { db, token_digest }
    }
}
