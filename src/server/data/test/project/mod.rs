use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParams, UpdateProjectParams},
};
use entity::sea_orm_active_enums::ProjectType;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

fn create_params() -> CreateProjectParams {
    CreateProjectParams {
        name: "Portfolio".to_string(),
        tech_stack: "Rust, Axum".to_string(),
        description: "Personal site".to_string(),
        languages: vec!["Rust".to_string(), "TypeScript".to_string()],
        project_type: ProjectType::Web,
        github: "https://github.com/example/portfolio".to_string(),
        production: Some("https://example.com".to_string()),
        images: vec![
            "https://img.example.com/1.png".to_string(),
            "https://img.example.com/2.png".to_string(),
            "https://img.example.com/3.png".to_string(),
        ],
        video: Some("https://video.example.com/demo.mp4".to_string()),
    }
}
