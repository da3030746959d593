use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::TokenDto,
        timeline::{CreateTimelineDto, TimelineDto, UpdateTimelineDto},
    },
    server::{
        controller::{authorized_body, json_or_empty, log_received, DELETE_SUCCESS},
        error::AppError,
        middleware::auth::TokenGuard,
        model::{
            access::AccessType,
            timeline::{CreateTimelineParams, Timeline, UpdateTimelineParams},
        },
        service::timeline::TimelineService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub async fn get_timelines(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    log_received(AccessType::Get, "All Timelines");

    let service = TimelineService::new(&state.db);

    let entries = service
        .get_all()
        .await
        .map_err(|e| e.with_message("Unable to get timeline entries"))?;

    let dtos: Vec<TimelineDto> = entries.into_iter().map(Timeline::into_dto).collect();

    Ok(Json(dtos))
}

pub async fn get_timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    log_received(AccessType::Get, "Timeline");

    let id = parse_id(&id)?;

    let service = TimelineService::new(&state.db);

    let entry = service
        .get_by_id(id)
        .await
        .map_err(|e| e.with_message(format!("Unable to get timeline with id: {}", id)))?;

    Ok(json_or_empty(entry.map(Timeline::into_dto)))
}

/// Create a timeline entry.
///
/// An unparsable `start` is stored as the current time and an unparsable `end` as null.
pub async fn create_timeline(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    log_received(AccessType::Post, "Timeline");

    let payload: CreateTimelineDto = authorized_body(&state, body)?;

    let service = TimelineService::new(&state.db);

    let entry = service
        .create(CreateTimelineParams::from_dto(payload))
        .await
        .map_err(|e| e.with_message("Unable to create timeline"))?;

    Ok(Json(entry.into_dto()))
}

/// Partially update a timeline entry. Dates that cannot be parsed are left unchanged.
pub async fn update_timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    log_received(AccessType::Put, "Timeline");

    let id = parse_id(&id)?;

    let payload: UpdateTimelineDto = authorized_body(&state, body)?;

    let service = TimelineService::new(&state.db);

    let entry = service
        .update(UpdateTimelineParams::from_dto(id, payload))
        .await
        .map_err(|e| e.with_message("Unable to update timeline"))?;

    Ok(json_or_empty(entry.map(Timeline::into_dto)))
}

pub async fn delete_timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<TokenDto>>,
) -> Result<impl IntoResponse, AppError> {
    log_received(AccessType::Delete, "Timeline");

    let id = parse_id(&id)?;

    let token = payload.and_then(|Json(body)| body.token);
    TokenGuard::new(&state.token_digest).require(token.as_deref())?;

    let service = TimelineService::new(&state.db);

    service.delete(id).await.map_err(|e| {
        e.with_message(format!(
            "There was an issue trying to delete timeline with id: {}",
            id
        ))
    })?;

    Ok(DELETE_SUCCESS)
}
