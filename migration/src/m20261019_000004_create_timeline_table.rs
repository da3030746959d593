use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timeline::Table)
                    .if_not_exists()
                    .col(pk_auto(Timeline::Id))
                    .col(timestamp_with_time_zone(Timeline::Start))
                    .col(timestamp_with_time_zone_null(Timeline::End))
                    .col(text(Timeline::Title))
                    .col(string(Timeline::Description))
                    .col(string_null(Timeline::Link))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timeline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timeline {
    Table,
    Id,
    Start,
    End,
    Title,
    Description,
    Link,
}
