use super::*;

/// Tests getting all timeline entries.
///
/// Expected: Ok with entries in id order
#[tokio::test]
async fn returns_entries_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_timeline(db).await?;
    let second = factory::timeline::TimelineFactory::new(db)
        .start(fixture::timeline::default_start() - Duration::days(365))
        .build()
        .await?;

    let repo = TimelineRepository::new(db);
    let result = repo.get_all().await?;

    assert_eq!(
        result.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests getting all timeline entries from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimelineRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
