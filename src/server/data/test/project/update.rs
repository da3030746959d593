use super::*;

/// Tests that omitted fields keep their stored values.
///
/// Expected: Ok(Some) with only name changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, images, video) = factory::helpers::create_project_with_media(db).await?;

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParams {
            id: project.id,
            name: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(result.project.name, "Renamed");
    assert_eq!(result.project.description, project.description);
    assert_eq!(result.project.github, project.github);
    assert_eq!(result.project.project_type, project.project_type);
    assert_eq!(
        result.images.iter().map(|i| i.id).collect::<Vec<_>>(),
        images.iter().map(|i| i.id).collect::<Vec<_>>()
    );
    assert_eq!(result.video.map(|v| v.id), Some(video.id));

    Ok(())
}

/// Tests that a supplied empty string is written instead of being skipped.
///
/// Expected: Ok(Some) with empty description
#[tokio::test]
async fn writes_empty_string_when_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParams {
            id: project.id,
            description: Some(String::new()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(result.project.description, "");
    assert_eq!(result.project.name, project.name);

    Ok(())
}

/// Tests replacing the image set and the video of a project.
///
/// Expected: Ok(Some) with only the new images in supplied order and the new video
#[tokio::test]
async fn replaces_images_and_video() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, _, _) = factory::helpers::create_project_with_media(db).await?;

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParams {
            id: project.id,
            images: Some(vec!["new-b.png".to_string(), "new-a.png".to_string()]),
            video: Some("new.mp4".to_string()),
            languages: Some(vec!["Swift".to_string()]),
            project_type: Some(ProjectType::Ios),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(
        result
            .images
            .iter()
            .map(|image| image.url.as_str())
            .collect::<Vec<_>>(),
        vec!["new-b.png", "new-a.png"]
    );
    assert_eq!(result.video.map(|video| video.url), Some("new.mp4".to_string()));
    assert_eq!(result.project.languages, "Swift");
    assert_eq!(result.project.project_type, ProjectType::Ios);
    assert_eq!(entity::prelude::Image::find().count(db).await?, 2);
    assert_eq!(entity::prelude::Video::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an empty image list clears all images.
///
/// Expected: Ok(Some) with no images
#[tokio::test]
async fn clears_images_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, _, _) = factory::helpers::create_project_with_media(db).await?;

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParams {
            id: project.id,
            images: Some(vec![]),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(result.images.is_empty());
    assert!(result.video.is_some());

    Ok(())
}

/// Tests updating a project that doesn't exist.
///
/// Expected: Ok(None) and no rows created
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParams {
            id: 42,
            name: Some("Ghost".to_string()),
            images: Some(vec!["ghost.png".to_string()]),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Image::find().count(db).await?, 0);

    Ok(())
}
