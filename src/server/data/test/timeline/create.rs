use super::*;

/// Tests creating a timeline entry with every field supplied.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_timeline_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc.with_ymd_and_hms(2022, 9, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 6, 30, 0, 0, 0).unwrap();

    let repo = TimelineRepository::new(db);
    let created = repo
        .create(CreateTimelineParams {
            start,
            end: Some(end),
            title: "Engineer".to_string(),
            description: "Built things".to_string(),
            link: Some("https://example.com".to_string()),
        })
        .await?;

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.start, start);
    assert_eq!(stored.end, Some(end));
    assert_eq!(stored.title, "Engineer");
    assert_eq!(stored.link.as_deref(), Some("https://example.com"));

    Ok(())
}

/// Tests creating an ongoing timeline entry.
///
/// Expected: Ok with no end date and no link
#[tokio::test]
async fn creates_timeline_without_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimelineRepository::new(db);
    let created = repo
        .create(CreateTimelineParams {
            start: fixture::timeline::default_start(),
            end: None,
            title: "Current role".to_string(),
            description: String::new(),
            link: None,
        })
        .await?;

    assert!(created.end.is_none());
    assert!(created.link.is_none());
    assert_eq!(entity::prelude::Timeline::find().count(db).await?, 1);

    Ok(())
}
