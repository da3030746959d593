use sea_orm::entity::prelude::*;

/// Platform a project targets, persisted as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ProjectType {
    #[sea_orm(num_value = 0)]
    Web,
    #[sea_orm(num_value = 1)]
    Ios,
}
