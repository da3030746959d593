use super::*;

/// Tests that deleting a project removes its images and video.
///
/// Expected: Ok with no project, image or video rows remaining
#[tokio::test]
async fn deletes_project_and_owned_media() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, _, _) = factory::helpers::create_project_with_media(db).await?;

    let repo = ProjectRepository::new(db);
    repo.delete(project.id).await?;

    assert!(repo.get_by_id(project.id).await?.is_none());
    assert_eq!(entity::prelude::Image::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Video::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting leaves other projects untouched.
///
/// Expected: Ok with the other project and its image still present
#[tokio::test]
async fn keeps_other_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_project(db).await?;
    let kept = factory::create_project(db).await?;
    factory::create_image(db, kept.id).await?;

    let repo = ProjectRepository::new(db);
    repo.delete(doomed.id).await?;

    assert_eq!(entity::prelude::Project::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Image::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting an id that doesn't exist.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo.delete(7).await;

    assert!(result.is_ok());

    Ok(())
}
