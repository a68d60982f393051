use super::*;

#[tokio::test]
async fn returns_existing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_teacher, _group, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = CalendarEventRepository::new(db);
    let result = repo.get_by_id(event.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, event.id);
    assert_eq!(found.title, event.title);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEventRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
