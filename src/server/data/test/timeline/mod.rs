use crate::server::{
    data::timeline::TimelineRepository,
    model::timeline::{CreateTimelineParams, UpdateTimelineParams},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
