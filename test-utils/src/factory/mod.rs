//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let project = factory::create_project(&db).await?;
//! let image = factory::create_image(&db, project.id).await?;
//!
//! // Project with two images and a video
//! let (project, images, video) = factory::helpers::create_project_with_media(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let project = factory::project::ProjectFactory::new(&db)
//!     .name("Portfolio")
//!     .production(Some("https://example.com".to_string()))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod image;
pub mod project;
pub mod timeline;
pub mod video;

pub use image::create_image;
pub use project::create_project;
pub use timeline::create_timeline;
pub use video::create_video;
