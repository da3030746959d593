use super::*;

/// Tests deleting a timeline entry.
///
/// Expected: Ok with the entry gone and others kept
#[tokio::test]
async fn deletes_only_target_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_timeline(db).await?;
    let kept = factory::create_timeline(db).await?;

    let repo = TimelineRepository::new(db);
    repo.delete(doomed.id).await?;

    assert!(repo.get_by_id(doomed.id).await?.is_none());
    assert!(repo.get_by_id(kept.id).await?.is_some());

    Ok(())
}

/// Tests deleting an id that doesn't exist.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimelineRepository::new(db);

    assert!(repo.delete(11).await.is_ok());

    Ok(())
}
