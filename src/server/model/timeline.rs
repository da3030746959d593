//! Timeline domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::timeline::{CreateTimelineDto, TimelineDto, UpdateTimelineDto},
    server::util::date::{optional_date, required_date},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

impl Timeline {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::timeline::Model) -> Self {
        Self {
            id: entity.id,
            start: entity.start,
            end: entity.end,
            title: entity.title,
            description: entity.description,
            link: entity.link,
        }
    }

    pub fn into_dto(self) -> TimelineDto {
        TimelineDto {
            id: self.id,
            start: self.start,
            end: self.end,
            title: self.title,
            description: self.description,
            link: self.link,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTimelineParams {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

impl CreateTimelineParams {
    /// Coerces request dates. An unusable `start` becomes the current time and an unusable
    /// `end` is dropped.
    pub fn from_dto(dto: CreateTimelineDto) -> Self {
        Self {
            start: required_date(dto.start.as_ref()),
            end: optional_date(dto.end.as_ref()),
            title: dto.title,
            description: dto.description,
            link: dto.link,
        }
    }
}

/// Parameters for a partial timeline update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTimelineParams {
    pub id: i32,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl UpdateTimelineParams {
    /// Coerces request dates. Dates that cannot be parsed are treated as absent.
    pub fn from_dto(id: i32, dto: UpdateTimelineDto) -> Self {
        Self {
            id,
            start: optional_date(dto.start.as_ref()),
            end: optional_date(dto.end.as_ref()),
            title: dto.title,
            description: dto.description,
            link: dto.link,
        }
    }
}
