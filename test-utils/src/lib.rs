//! Portfolio Test Utils
//!
//! Provides shared testing utilities for the portfolio API. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases whose tables are generated
//! straight from the SeaORM entities, plus fixtures and factories for portfolio rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, never inserted
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_projects() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_portfolio_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let project = factory::create_project(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
