pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_project_table;
mod m20261019_000002_create_image_table;
mod m20261019_000003_create_video_table;
mod m20261019_000004_create_timeline_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_project_table::Migration),
            Box::new(m20261019_000002_create_image_table::Migration),
            Box::new(m20261019_000003_create_video_table::Migration),
            Box::new(m20261019_000004_create_timeline_table::Migration),
        ]
    }
}
