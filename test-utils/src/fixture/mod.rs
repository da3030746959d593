//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for use in unit tests and as default
//! values for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let project = fixture::project::entity();
//!
//! // Create with custom fields
//! let ios = fixture::project::entity_builder()
//!     .project_type(ProjectType::Ios)
//!     .build();
//! ```

pub mod project;
pub mod timeline;

pub use project::{entity as project_entity, entity_builder as project_entity_builder};
pub use timeline::{entity as timeline_entity, entity_builder as timeline_entity_builder};
