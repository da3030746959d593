use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::log_attempt,
    model::{
        access::AccessType,
        project::{join_languages, CreateProjectParams, ProjectWithMedia, UpdateProjectParams},
    },
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every project with its images and video
    pub async fn get_all(&self) -> Result<Vec<ProjectWithMedia>, DbErr> {
        log_attempt(AccessType::Get, "All Projects");

        let projects = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        attach_media(self.db, projects).await
    }

    /// Gets a project by ID with its images and video
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProjectWithMedia>, DbErr> {
        log_attempt(AccessType::Get, "Project");

        find_with_media(self.db, id).await
    }

    /// Creates a project, its images and its optional video in a single transaction
    pub async fn create(&self, params: CreateProjectParams) -> Result<ProjectWithMedia, DbErr> {
        log_attempt(AccessType::Post, "Project");

        let txn = self.db.begin().await?;

        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            tech_stack: ActiveValue::Set(params.tech_stack),
            description: ActiveValue::Set(params.description),
            languages: ActiveValue::Set(join_languages(&params.languages)),
            project_type: ActiveValue::Set(params.project_type),
            github: ActiveValue::Set(params.github),
            production: ActiveValue::Set(params.production),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let images = insert_images(&txn, project.id, params.images).await?;

        let video = match params.video {
            Some(url) => Some(insert_video(&txn, project.id, url).await?),
            None => None,
        };

        txn.commit().await?;

        Ok(ProjectWithMedia {
            project,
            images,
            video,
        })
    }

    /// Applies the supplied fields to a project
    ///
    /// Returns None if the project doesn't exist. Supplied images replace the existing
    /// image set and a supplied video replaces the existing video.
    pub async fn update(
        &self,
        params: UpdateProjectParams,
    ) -> Result<Option<ProjectWithMedia>, DbErr> {
        log_attempt(AccessType::Put, "Project");

        let txn = self.db.begin().await?;

        let Some(project) = entity::prelude::Project::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::project::ActiveModel = project.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(tech_stack) = params.tech_stack {
            active_model.tech_stack = ActiveValue::Set(tech_stack);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(languages) = params.languages {
            active_model.languages = ActiveValue::Set(join_languages(&languages));
        }
        if let Some(project_type) = params.project_type {
            active_model.project_type = ActiveValue::Set(project_type);
        }
        if let Some(github) = params.github {
            active_model.github = ActiveValue::Set(github);
        }
        if let Some(production) = params.production {
            active_model.production = ActiveValue::Set(Some(production));
        }

        if active_model.is_changed() {
            active_model.update(&txn).await?;
        }

        if let Some(urls) = params.images {
            entity::prelude::Image::delete_many()
                .filter(entity::image::Column::ProjectId.eq(params.id))
                .exec(&txn)
                .await?;

            insert_images(&txn, params.id, urls).await?;
        }

        if let Some(url) = params.video {
            entity::prelude::Video::delete_many()
                .filter(entity::video::Column::ProjectId.eq(params.id))
                .exec(&txn)
                .await?;

            insert_video(&txn, params.id, url).await?;
        }

        let result = find_with_media(&txn, params.id).await?;

        txn.commit().await?;

        Ok(result)
    }

    /// Deletes a project; its images and video go with it through cascading foreign keys
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        log_attempt(AccessType::Delete, "Project");

        entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

async fn find_with_media<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<ProjectWithMedia>, DbErr> {
    let Some(project) = entity::prelude::Project::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    Ok(attach_media(conn, vec![project]).await?.pop())
}

/// Loads images and videos for all given projects in two queries
async fn attach_media<C: ConnectionTrait>(
    conn: &C,
    projects: Vec<entity::project::Model>,
) -> Result<Vec<ProjectWithMedia>, DbErr> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let project_ids: Vec<i32> = projects.iter().map(|p| p.id).collect();

    let mut images_map: HashMap<i32, Vec<entity::image::Model>> = HashMap::new();
    for image in entity::prelude::Image::find()
        .filter(entity::image::Column::ProjectId.is_in(project_ids.clone()))
        .order_by_asc(entity::image::Column::Id)
        .all(conn)
        .await?
    {
        images_map.entry(image.project_id).or_default().push(image);
    }

    let mut videos_map: HashMap<i32, entity::video::Model> = entity::prelude::Video::find()
        .filter(entity::video::Column::ProjectId.is_in(project_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|v| (v.project_id, v))
        .collect();

    Ok(projects
        .into_iter()
        .map(|project| ProjectWithMedia {
            images: images_map.remove(&project.id).unwrap_or_default(),
            video: videos_map.remove(&project.id),
            project,
        })
        .collect())
}

async fn insert_images<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    urls: Vec<String>,
) -> Result<Vec<entity::image::Model>, DbErr> {
    let mut images = Vec::with_capacity(urls.len());

    for url in urls {
        let image = entity::image::ActiveModel {
            added: ActiveValue::Set(Utc::now()),
            url: ActiveValue::Set(url),
            project_id: ActiveValue::Set(project_id),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        images.push(image);
    }

    Ok(images)
}

async fn insert_video<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    url: String,
) -> Result<entity::video::Model, DbErr> {
    entity::video::ActiveModel {
        added: ActiveValue::Set(Utc::now()),
        url: ActiveValue::Set(url),
        project_id: ActiveValue::Set(project_id),
        ..Default::default()
    }
    .insert(conn)
    .await
}
