use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::TokenDto,
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    },
    server::{
        controller::{authorized_body, json_or_empty, log_received, DELETE_SUCCESS},
        error::AppError,
        middleware::auth::TokenGuard,
        model::{
            access::AccessType,
            project::{CreateProjectParams, Project, UpdateProjectParams},
        },
        service::project::ProjectService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// List every project.
///
/// # Returns
/// - JSON array of projects, each with image URLs in insertion order
/// - `Unable to get projects` - Database error
pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    log_received(AccessType::Get, "All Projects");

    let service = ProjectService::new(&state.db);

    let projects = service
        .get_all()
        .await
        .map_err(|e| e.with_message("Unable to get projects"))?;

    let dtos: Vec<ProjectDto> = projects.into_iter().map(Project::into_dto).collect();

    Ok(Json(dtos))
}

/// Get a single project.
///
/// # Returns
/// - JSON project, or an empty body when no project has this id
/// - `id must be a number` - Non-numeric id
/// - `Unable to get project with id: {id}` - Database error
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    log_received(AccessType::Get, "Project");

    let id = parse_id(&id)?;

    let service = ProjectService::new(&state.db);

    let project = service
        .get_by_id(id)
        .await
        .map_err(|e| e.with_message(format!("Unable to get project with id: {}", id)))?;

    Ok(json_or_empty(project.map(Project::into_dto)))
}

/// Create a project with its images and optional video.
///
/// # Returns
/// - JSON project as stored
/// - `Incorrect token` - Missing or wrong token, checked before the rest of the body
/// - `Invalid request body` - Missing or ill-typed field
/// - `type must be 0 (WEB) or 1 (IOS)` - Unknown project type
/// - `Unable to create project` - Database error, nothing is stored
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    log_received(AccessType::Post, "Project");

    let payload: CreateProjectDto = authorized_body(&state, body)?;

    let params = CreateProjectParams::from_dto(payload)?;

    let service = ProjectService::new(&state.db);

    let project = service
        .create(params)
        .await
        .map_err(|e| e.with_message("Unable to create project"))?;

    Ok(Json(project.into_dto()))
}

/// Partially update a project.
///
/// Only fields present in the body are written. `images` replaces the whole image set and
/// `video` replaces the current video.
///
/// # Returns
/// - JSON project after the update, or an empty body when no project has this id
/// - `id must be a number` - Non-numeric id, checked before the token
/// - `Incorrect token` - Missing or wrong token, checked before the rest of the body
/// - `Invalid request body` - Missing or ill-typed field
/// - `Unable to update project` - Database error
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    log_received(AccessType::Put, "Project");

    let id = parse_id(&id)?;

    let payload: UpdateProjectDto = authorized_body(&state, body)?;

    let params = UpdateProjectParams::from_dto(id, payload)?;

    let service = ProjectService::new(&state.db);

    let project = service
        .update(params)
        .await
        .map_err(|e| e.with_message("Unable to update project"))?;

    Ok(json_or_empty(project.map(Project::into_dto)))
}

/// Delete a project along with its images and video.
///
/// # Returns
/// - `Success` - Deleted, or no project had this id
/// - `id must be a number` - Non-numeric id, checked before the token
/// - `Incorrect token` - Missing body, missing token or wrong token
/// - `There was an issue trying to delete project with id: {id}` - Database error
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<TokenDto>>,
) -> Result<impl IntoResponse, AppError> {
    log_received(AccessType::Delete, "Project");

    let id = parse_id(&id)?;

    let token = payload.and_then(|Json(body)| body.token);
    TokenGuard::new(&state.token_digest).require(token.as_deref())?;

    let service = ProjectService::new(&state.db);

    service.delete(id).await.map_err(|e| {
        e.with_message(format!(
            "There was an issue trying to delete project with id: {}",
            id
        ))
    })?;

    Ok(DELETE_SUCCESS)
}
