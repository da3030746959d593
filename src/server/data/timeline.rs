use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    data::log_attempt,
    model::{
        access::AccessType,
        timeline::{CreateTimelineParams, UpdateTimelineParams},
    },
};

pub struct TimelineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimelineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::timeline::Model>, DbErr> {
        log_attempt(AccessType::Get, "All Timelines");

        entity::prelude::Timeline::find()
            .order_by_asc(entity::timeline::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::timeline::Model>, DbErr> {
        log_attempt(AccessType::Get, "Timeline");

        entity::prelude::Timeline::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        params: CreateTimelineParams,
    ) -> Result<entity::timeline::Model, DbErr> {
        log_attempt(AccessType::Post, "Timeline");

        entity::timeline::ActiveModel {
            start: ActiveValue::Set(params.start),
            end: ActiveValue::Set(params.end),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            link: ActiveValue::Set(params.link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the supplied fields to a timeline entry
    ///
    /// Returns None if the entry doesn't exist.
    pub async fn update(
        &self,
        params: UpdateTimelineParams,
    ) -> Result<Option<entity::timeline::Model>, DbErr> {
        log_attempt(AccessType::Put, "Timeline");

        let Some(timeline) = entity::prelude::Timeline::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::timeline::ActiveModel = timeline.clone().into();
        if let Some(start) = params.start {
            active_model.start = ActiveValue::Set(start);
        }
        if let Some(end) = params.end {
            active_model.end = ActiveValue::Set(Some(end));
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(link) = params.link {
            active_model.link = ActiveValue::Set(Some(link));
        }

        if !active_model.is_changed() {
            return Ok(Some(timeline));
        }

        active_model.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        log_attempt(AccessType::Delete, "Timeline");

        entity::prelude::Timeline::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
