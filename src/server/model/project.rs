//! Project domain models and parameters.
//!
//! A project owns an ordered list of images and at most one video. The data layer returns
//! `ProjectWithMedia` and the service layer flattens it into `Project`, which keeps only the
//! URLs of the owned rows.

use entity::sea_orm_active_enums::ProjectType;
use sea_orm::ActiveEnum;

use crate::{
    model::project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    server::error::{request::RequestError, AppError},
};

/// Separator used to flatten a language list into a single column.
pub const LANGUAGE_SEPARATOR: &str = ",";

/// Joins a language list into its stored form. Entries containing the separator are not
/// escaped and will split differently when read back.
pub fn join_languages(languages: &[String]) -> String {
    languages.join(LANGUAGE_SEPARATOR)
}

/// Maps the wire integer onto a project type.
///
/// # Returns
/// - `Ok(ProjectType)` - `0` for WEB, `1` for IOS
/// - `Err(AppError::RequestErr(InvalidProjectType))` - Any other value
pub fn project_type_from_code(code: i32) -> Result<ProjectType, AppError> {
    ProjectType::try_from_value(&code).map_err(|_| RequestError::InvalidProjectType(code).into())
}

/// Project row with its owned rows, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct ProjectWithMedia {
    pub project: entity::project::Model,
    /// Ordered by id, i.e. insertion order.
    pub images: Vec<entity::image::Model>,
    pub video: Option<entity::video::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub tech_stack: String,
    pub description: String,
    pub languages: String,
    pub project_type: ProjectType,
    pub github: String,
    pub production: Option<String>,
    pub images: Vec<String>,
    pub video: Option<String>,
}

impl Project {
    /// Converts repository output into the domain model, flattening owned rows to URLs.
    pub fn from_with_media(result: ProjectWithMedia) -> Self {
        let ProjectWithMedia {
            project,
            images,
            video,
        } = result;

        Self {
            id: project.id,
            name: project.name,
            tech_stack: project.tech_stack,
            description: project.description,
            languages: project.languages,
            project_type: project.project_type,
            github: project.github,
            production: project.production,
            images: images.into_iter().map(|image| image.url).collect(),
            video: video.map(|video| video.url),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            tech_stack: self.tech_stack,
            description: self.description,
            languages: self.languages,
            project_type: self.project_type.to_value(),
            github: self.github,
            production: self.production,
            images: self.images,
            video: self.video,
        }
    }
}

/// Parameters for creating a project together with its owned rows.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub tech_stack: String,
    pub description: String,
    pub languages: Vec<String>,
    pub project_type: ProjectType,
    pub github: String,
    pub production: Option<String>,
    /// Image URLs in display order.
    pub images: Vec<String>,
    pub video: Option<String>,
}

impl CreateProjectParams {
    /// Converts a create request into parameters, validating the project type.
    ///
    /// # Returns
    /// - `Ok(CreateProjectParams)` - Validated parameters
    /// - `Err(AppError::RequestErr(InvalidProjectType))` - Unknown `type` code
    pub fn from_dto(dto: CreateProjectDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            tech_stack: dto.tech_stack,
            description: dto.description,
            languages: dto.languages,
            project_type: project_type_from_code(dto.project_type)?,
            github: dto.github,
            production: dto.production,
            images: dto.images,
            video: dto.video,
        })
    }
}

/// Parameters for a partial project update.
///
/// `None` means "leave unchanged". A present empty string or empty list is written as is.
/// A present `images` list replaces the whole image set; a present `video` replaces the
/// current video.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub id: i32,
    pub name: Option<String>,
    pub tech_stack: Option<String>,
    pub description: Option<String>,
    pub languages: Option<Vec<String>>,
    pub project_type: Option<ProjectType>,
    pub github: Option<String>,
    pub production: Option<String>,
    pub images: Option<Vec<String>>,
    pub video: Option<String>,
}

impl UpdateProjectParams {
    /// Converts an update request for project `id` into parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateProjectParams)` - Validated parameters
    /// - `Err(AppError::RequestErr(InvalidProjectType))` - Unknown `type` code
    pub fn from_dto(id: i32, dto: UpdateProjectDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name,
            tech_stack: dto.tech_stack,
            description: dto.description,
            languages: dto.languages,
            project_type: dto.project_type.map(project_type_from_code).transpose()?,
            github: dto.github,
            production: dto.production,
            images: dto.images,
            video: dto.video,
        })
    }
}
