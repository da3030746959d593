use super::*;

/// Tests getting all projects from an empty database.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that every project is returned with only its own media.
///
/// Expected: Ok with projects in id order, each carrying its own images and video
#[tokio::test]
async fn attaches_media_to_owning_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, images, video) = factory::helpers::create_project_with_media(db).await?;
    let second = factory::create_project(db).await?;
    let other_image = factory::create_image(db, second.id).await?;

    let repo = ProjectRepository::new(db);
    let result = repo.get_all().await?;

    assert_eq!(result.len(), 2);

    assert_eq!(result[0].project.id, first.id);
    assert_eq!(
        result[0].images.iter().map(|i| i.id).collect::<Vec<_>>(),
        images.iter().map(|i| i.id).collect::<Vec<_>>()
    );
    assert_eq!(result[0].video.as_ref().map(|v| v.id), Some(video.id));

    assert_eq!(result[1].project.id, second.id);
    assert_eq!(result[1].images.len(), 1);
    assert_eq!(result[1].images[0].id, other_image.id);
    assert!(result[1].video.is_none());

    Ok(())
}
