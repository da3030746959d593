use super::*;

/// Tests creating a project with images and a video.
///
/// Verifies that the project row is stored with joined languages and that the owned
/// images keep the order they were supplied in.
///
/// Expected: Ok with project, three ordered images and a video
#[tokio::test]
async fn creates_project_with_media() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let created = repo.create(create_params()).await?;

    assert_eq!(created.project.name, "Portfolio");
    assert_eq!(created.project.languages, "Rust,TypeScript");
    assert_eq!(created.project.project_type, ProjectType::Web);
    assert_eq!(
        created
            .images
            .iter()
            .map(|image| image.url.as_str())
            .collect::<Vec<_>>(),
        vec![
            "https://img.example.com/1.png",
            "https://img.example.com/2.png",
            "https://img.example.com/3.png",
        ]
    );
    assert_eq!(
        created.video.as_ref().map(|video| video.url.as_str()),
        Some("https://video.example.com/demo.mp4")
    );

    let stored = repo.get_by_id(created.project.id).await?.unwrap();
    assert_eq!(stored.images.len(), 3);
    assert_eq!(stored.images[0].url, "https://img.example.com/1.png");
    assert_eq!(stored.images[2].url, "https://img.example.com/3.png");

    Ok(())
}

/// Tests creating a project without any media.
///
/// Expected: Ok with no images and no video rows
#[tokio::test]
async fn creates_project_without_media() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let created = repo
        .create(CreateProjectParams {
            images: vec![],
            video: None,
            production: None,
            ..create_params()
        })
        .await?;

    assert!(created.images.is_empty());
    assert!(created.video.is_none());
    assert!(created.project.production.is_none());
    assert_eq!(entity::prelude::Image::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Video::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failing owned-row insert leaves nothing behind.
///
/// The video table is missing, so the video insert fails after the project and images
/// were inserted inside the transaction.
///
/// Expected: Err and no project or image rows persisted
#[tokio::test]
async fn rolls_back_when_video_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo.create(create_params()).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Project::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Image::find().count(db).await?, 0);

    Ok(())
}
