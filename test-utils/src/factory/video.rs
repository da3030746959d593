//! Video factory for creating the test video of a project.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test videos. A project owns at most one video.
pub struct VideoFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    url: String,
}

impl<'a> VideoFactory<'a> {
    /// Creates a new VideoFactory with a unique default URL.
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        Self {
            db,
            project_id,
            url: format!("https://cdn.example.com/videos/{}.mp4", next_id()),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the video entity into the database.
    pub async fn build(self) -> Result<entity::video::Model, DbErr> {
        entity::video::ActiveModel {
            id: ActiveValue::NotSet,
            added: ActiveValue::Set(Utc::now()),
            url: ActiveValue::Set(self.url),
            project_id: ActiveValue::Set(self.project_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a video with a default URL for the given project.
pub async fn create_video(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::video::Model, DbErr> {
    VideoFactory::new(db, project_id).build().await
}
