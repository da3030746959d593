use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ProjectType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub tech_stack: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Language list joined with `,`. Separators inside entries are not escaped.
    pub languages: String,
    #[sea_orm(column_name = "type")]
    pub project_type: ProjectType,
    pub github: String,
    pub production: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::image::Entity")]
    Image,
    #[sea_orm(has_one = "super::video::Entity")]
    Video,
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
