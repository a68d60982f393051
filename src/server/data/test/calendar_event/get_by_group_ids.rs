use super::*;

/// Tests filtering events by group.
///
/// Verifies that events of groups outside the filter are excluded and that results are
/// ordered by start time regardless of insertion order.
///
/// Expected: the two events of the first group, earliest first
#[tokio::test]
async fn returns_events_of_groups_in_start_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let other_group = factory::school_group::create_group(db).await?;

    let early = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 2, 5, 8, 0, 0).unwrap();

    let late_event = factory::calendar_event::CalendarEventFactory::new(db, group.id, teacher.id)
        .times(late, late + Duration::hours(1))
        .build()
        .await?;
    let early_event = factory::calendar_event::CalendarEventFactory::new(db, group.id, teacher.id)
        .times(early, early + Duration::hours(1))
        .build()
        .await?;
    factory::calendar_event::create_event(db, other_group.id, teacher.id).await?;

    let repo = CalendarEventRepository::new(db);
    let events = repo.get_by_group_ids(&[group.id]).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![early_event.id, late_event.id]);

    Ok(())
}

#[tokio::test]
async fn returns_empty_for_no_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_event_with_dependencies(db).await?;

    let repo = CalendarEventRepository::new(db);
    let events = repo.get_by_group_ids(&[]).await?;

    assert!(events.is_empty());

    Ok(())
}

/// Tests that `get_all` ignores group membership.
///
/// Expected: events from both groups
#[tokio::test]
async fn get_all_returns_every_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let other_group = factory::school_group::create_group(db).await?;
    factory::calendar_event::create_event(db, group.id, teacher.id).await?;
    factory::calendar_event::create_event(db, other_group.id, teacher.id).await?;

    let repo = CalendarEventRepository::new(db);
    let events = repo.get_all().await?;

    assert_eq!(events.len(), 2);

    Ok(())
}
