use super::*;

/// Tests that only supplied fields change.
///
/// Expected: Ok(Some) with new title and end, other fields untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let timeline = factory::create_timeline(db).await?;
    let end = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

    let repo = TimelineRepository::new(db);
    let result = repo
        .update(UpdateTimelineParams {
            id: timeline.id,
            title: Some("Promoted".to_string()),
            end: Some(end),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(result.title, "Promoted");
    assert_eq!(result.end, Some(end));
    assert_eq!(result.start, timeline.start);
    assert_eq!(result.description, timeline.description);
    assert_eq!(result.link, timeline.link);

    Ok(())
}

/// Tests an update that supplies no fields.
///
/// Expected: Ok(Some) equal to the stored entry
#[tokio::test]
async fn returns_entry_unchanged_without_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let timeline = factory::create_timeline(db).await?;

    let repo = TimelineRepository::new(db);
    let result = repo
        .update(UpdateTimelineParams {
            id: timeline.id,
            ..Default::default()
        })
        .await?;

    assert_eq!(result, Some(timeline));

    Ok(())
}

/// Tests updating an id that doesn't exist.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_portfolio_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimelineRepository::new(db);
    let result = repo
        .update(UpdateTimelineParams {
            id: 5,
            title: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Timeline::find().count(db).await?, 0);

    Ok(())
}
