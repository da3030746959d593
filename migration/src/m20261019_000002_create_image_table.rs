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
                    .table(Image::Table)
                    .if_not_exists()
                    .col(pk_auto(Image::Id))
                    .col(timestamp_with_time_zone(Image::Added))
                    .col(string(Image::Url))
                    .col(integer(Image::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_project_id")
                            .from(Image::Table, Image::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Images are always fetched per project
        manager
            .create_index(
                Index::create()
                    .name("idx_image_project_id")
                    .table(Image::Table)
                    .col(Image::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_image_project_id")
                    .table(Image::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    Table,
    Id,
    Added,
    Url,
    ProjectId,
}
