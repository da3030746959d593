use super::*;

/// Tests getting a timeline entry by id.
///
/// Expected: Ok(Some) matching the created entry
#[tokio::test]
async fn returns_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let timeline = factory::create_timeline(db).await?;

    let repo = TimelineRepository::new(db);
    let result = repo.get_by_id(timeline.id).await?;

    assert_eq!(result, Some(timeline));

    Ok(())
}

/// Tests getting an id that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimelineRepository::new(db);

    assert!(repo.get_by_id(404).await?.is_none());

    Ok(())
}
