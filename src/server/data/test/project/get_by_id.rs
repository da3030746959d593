use super::*;

/// Tests getting a project that exists.
///
/// Expected: Ok(Some) with media attached
#[tokio::test]
async fn returns_project_with_media() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, images, video) = factory::helpers::create_project_with_media(db).await?;

    let repo = ProjectRepository::new(db);
    let result = repo.get_by_id(project.id).await?.unwrap();

    assert_eq!(result.project, project);
    assert_eq!(
        result.images.iter().map(|i| i.url.as_str()).collect::<Vec<_>>(),
        images.iter().map(|i| i.url.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(result.video.map(|v| v.id), Some(video.id));

    Ok(())
}

/// Tests getting a project id that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
