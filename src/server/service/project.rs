use sea_orm::DatabaseConnection;

use crate::server::{
    data::project::ProjectRepository,
    error::AppError,
    model::project::{CreateProjectParams, Project, UpdateProjectParams},
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every project with image and video URLs
    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        let repo = ProjectRepository::new(self.db);

        let projects = repo.get_all().await?;

        Ok(projects.into_iter().map(Project::from_with_media).collect())
    }

    /// Gets a project by ID, None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        let repo = ProjectRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        Ok(result.map(Project::from_with_media))
    }

    /// Creates a project along with its images and video
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.db);

        let created = repo.create(params).await?;

        Ok(Project::from_with_media(created))
    }

    /// Updates a project
    /// Returns None if the project doesn't exist
    pub async fn update(&self, params: UpdateProjectParams) -> Result<Option<Project>, AppError> {
        let repo = ProjectRepository::new(self.db);

        let result = repo.update(params).await?;

        Ok(result.map(Project::from_with_media))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ProjectRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}
