//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a project owning two images and a video.
///
/// Images are inserted in order, so the first returned image has the lower id.
///
/// # Returns
/// - `Ok((project, images, video))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_media(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::project::Model,
        Vec<entity::image::Model>,
        entity::video::Model,
    ),
    DbErr,
> {
    let project = crate::factory::project::create_project(db).await?;
    let first = crate::factory::image::create_image(db, project.id).await?;
    let second = crate::factory::image::create_image(db, project.id).await?;
    let video = crate::factory::video::create_video(db, project.id).await?;

    Ok((project, vec![first, second], video))
}
