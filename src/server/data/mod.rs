//! Database repository layer.
//!
//! Repositories own every query against the portfolio schema. They take SeaORM entity
//! models in and out and leave DTO conversion to the model layer, so a repository can be
//! exercised against an in-memory SQLite database without the HTTP stack.

pub mod project;
pub mod timeline;

use crate::server::model::access::AccessType;

fn log_attempt(access: AccessType, kind: &str) {
    tracing::info!("Attempting to {} type {} from database", access, kind);
}

#[cfg(test)]
mod test;
