use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Video::Table)
                    .if_not_exists()
                    .col(pk_auto(Video::Id))
                    .col(timestamp_with_time_zone(Video::Added))
                    .col(string(Video::Url))
                    .col(integer_uniq(Video::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_project_id")
                            .from(Video::Table, Video::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Video::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Video {
    Table,
    Id,
    Added,
    Url,
    ProjectId,
}
