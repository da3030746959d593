//! Timeline factory for creating test timeline entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test timeline entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let entry = TimelineFactory::new(&db)
///     .title("Joined a team")
///     .link(Some("https://example.com".to_string()))
///     .build()
///     .await?;
/// ```
pub struct TimelineFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::timeline::Model,
}

impl<'a> TimelineFactory<'a> {
    /// Creates a new TimelineFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::timeline::entity_builder()
            .title(format!("Entry {}", id))
            .build();

        Self { db, entity }
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.entity.start = start;
        self
    }

    pub fn end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.entity.end = end;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn link(mut self, link: Option<String>) -> Self {
        self.entity.link = link;
        self
    }

    /// Builds and inserts the timeline entity into the database.
    pub async fn build(self) -> Result<entity::timeline::Model, DbErr> {
        entity::timeline::ActiveModel {
            id: ActiveValue::NotSet,
            start: ActiveValue::Set(self.entity.start),
            end: ActiveValue::Set(self.entity.end),
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            link: ActiveValue::Set(self.entity.link),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a timeline entry with default values.
pub async fn create_timeline(db: &DatabaseConnection) -> Result<entity::timeline::Model, DbErr> {
    TimelineFactory::new(db).build().await
}
