use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change.
///
/// Expected: new title, original times and group
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_teacher, group, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = CalendarEventRepository::new(db);
    let updated = repo
        .update(UpdateCalendarEventParams {
            id: event.id,
            title: Some("Renamed".to_string()),
            location: Some(Some("Gym".to_string())),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.location.as_deref(), Some("Gym"));
    assert_eq!(updated.start_time, event.start_time);
    assert_eq!(updated.end_time, event.end_time);
    assert_eq!(updated.group_id, group.id);

    Ok(())
}

/// Tests clearing nullable fields.
///
/// Expected: description removed, location unchanged
#[tokio::test]
async fn clears_description_when_set_to_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let event = factory::calendar_event::CalendarEventFactory::new(db, group.id, teacher.id)
        .description(Some("Bring a calculator".to_string()))
        .location(Some("Room 3".to_string()))
        .build()
        .await?;

    let repo = CalendarEventRepository::new(db);
    let updated = repo
        .update(UpdateCalendarEventParams {
            id: event.id,
            description: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(updated.description.is_none());
    assert_eq!(updated.location.as_deref(), Some("Room 3"));

    Ok(())
}

/// Tests that updating a root leaves its recurrence and instances untouched.
///
/// Expected: root still recurring, instances still linked
#[tokio::test]
async fn keeps_series_link_when_updating_root() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let (root, instances) =
        factory::calendar_event::create_weekly_series(db, group.id, teacher.id, 2).await?;

    let repo = CalendarEventRepository::new(db);
    let updated = repo
        .update(UpdateCalendarEventParams {
            id: root.id,
            title: Some("Moved lesson".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert!(updated.is_recurring);
    assert_eq!(updated.recurrence_type.as_deref(), Some("weekly"));
    assert_eq!(repo.get_instance_ids(root.id).await?.len(), instances.len());

    Ok(())
}

#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEventRepository::new(db);
    let result = repo
        .update(UpdateCalendarEventParams {
            id: 5,
            title: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
