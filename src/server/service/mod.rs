//! Service layer between controllers and repositories.
//!
//! Services convert repository output into domain models and lift `DbErr` into
//! `AppError`. Controllers never talk to repositories directly.

pub mod project;
pub mod timeline;
