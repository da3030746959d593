//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use entity::sea_orm_active_enums::ProjectType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// Default values are sourced from the project fixture, with a unique name per project.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::project::ProjectFactory;
///
/// let project = ProjectFactory::new(&db)
///     .name("Custom Project")
///     .project_type(ProjectType::Ios)
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::project::Model,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProjectFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::project::entity_builder()
            .name(format!("Project {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn tech_stack(mut self, tech_stack: impl Into<String>) -> Self {
        self.entity.tech_stack = tech_stack.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.entity.languages = languages.into();
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.entity.project_type = project_type;
        self
    }

    pub fn github(mut self, github: impl Into<String>) -> Self {
        self.entity.github = github.into();
        self
    }

    pub fn production(mut self, production: Option<String>) -> Self {
        self.entity.production = production;
        self
    }

    /// Builds and inserts the project entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            tech_stack: ActiveValue::Set(self.entity.tech_stack),
            description: ActiveValue::Set(self.entity.description),
            languages: ActiveValue::Set(self.entity.languages),
            project_type: ActiveValue::Set(self.entity.project_type),
            github: ActiveValue::Set(self.entity.github),
            production: ActiveValue::Set(self.entity.production),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
///
/// Shorthand for `ProjectFactory::new(db).build().await`.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
