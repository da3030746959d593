use sea_orm::DatabaseConnection;

use crate::server::{
    data::timeline::TimelineRepository,
    error::AppError,
    model::timeline::{CreateTimelineParams, Timeline, UpdateTimelineParams},
};

pub struct TimelineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimelineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Timeline>, AppError> {
        let repo = TimelineRepository::new(self.db);

        let entries = repo.get_all().await?;

        Ok(entries.into_iter().map(Timeline::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Timeline>, AppError> {
        let repo = TimelineRepository::new(self.db);

        Ok(repo.get_by_id(id).await?.map(Timeline::from_entity))
    }

    pub async fn create(&self, params: CreateTimelineParams) -> Result<Timeline, AppError> {
        let repo = TimelineRepository::new(self.db);

        let created = repo.create(params).await?;

        Ok(Timeline::from_entity(created))
    }

    /// Updates a timeline entry
    /// Returns None if the entry doesn't exist
    pub async fn update(
        &self,
        params: UpdateTimelineParams,
    ) -> Result<Option<Timeline>, AppError> {
        let repo = TimelineRepository::new(self.db);

        Ok(repo.update(params).await?.map(Timeline::from_entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TimelineRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}
