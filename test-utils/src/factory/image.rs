//! Image factory for creating test image entities owned by a project.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test images.
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    url: String,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory with a unique default URL.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `project_id` - Project owning the image
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        Self {
            db,
            project_id,
            url: format!("https://cdn.example.com/images/{}.png", next_id()),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the image entity into the database.
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        entity::image::ActiveModel {
            id: ActiveValue::NotSet,
            added: ActiveValue::Set(Utc::now()),
            url: ActiveValue::Set(self.url),
            project_id: ActiveValue::Set(self.project_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with a default URL for the given project.
pub async fn create_image(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db, project_id).build().await
}
