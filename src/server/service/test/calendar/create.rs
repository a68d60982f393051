use super::*;

/// Tests creating a single standalone event.
///
/// Expected: one row, returned with group and creator names
#[tokio::test]
async fn creates_standalone_event_with_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let created = service.create(lesson(vec![group.id], teacher.id)).await?;

    assert_eq!(created.total_created, 1);
    assert_eq!(created.events.len(), 1);
    let details = &created.events[0];
    assert_eq!(details.group_name.as_deref(), Some(group.name.as_str()));
    assert_eq!(details.creator_name.as_deref(), Some(teacher.username.as_str()));
    assert!(!details.event.is_recurring);

    Ok(())
}

/// Tests the documented weekly series.
///
/// Verifies that a root from 2024-01-01 09:00 to 10:00 ending 2024-01-22 09:00 is stored
/// with three linked instances.
///
/// Expected: total_created = 4, instances on 01-08, 01-15 and 01-22
#[tokio::test]
async fn creates_weekly_series() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let created = service
        .create(CreateCalendarEventsParams {
            is_recurring: true,
            recurrence_type: Some("weekly".to_string()),
            recurrence_end: Some(Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).unwrap()),
            ..lesson(vec![group.id], teacher.id)
        })
        .await?;

    assert_eq!(created.total_created, 4);
    let root = &created.events[0].event;
    assert!(root.is_recurring);

    let mut instances: Vec<_> = entity::prelude::CalendarEvent::find()
        .all(db)
        .await?
        .into_iter()
        .filter(|e| e.parent_event_id == Some(root.id))
        .collect();
    instances.sort_by_key(|e| e.start_time);

    let starts: Vec<_> = instances.iter().map(|e| e.start_time).collect();
    assert_eq!(
        starts,
        vec![
            Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).unwrap(),
        ]
    );
    assert!(instances
        .iter()
        .all(|e| e.end_time - e.start_time == Duration::hours(1) && !e.is_recurring));

    Ok(())
}

/// Tests creating a series in several groups.
///
/// Expected: one root per group, each with its own instances
#[tokio::test]
async fn creates_series_per_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, class) = factory::helpers::create_event_dependencies(db).await?;
    let club = factory::school_group::create_group(db).await?;
    factory::school_group::add_member(db, teacher.id, club.id).await?;

    let service = CalendarEventService::new(db);
    let created = service
        .create(CreateCalendarEventsParams {
            is_recurring: true,
            recurrence_type: Some("biweekly".to_string()),
            recurrence_end: Some(monday_nine() + Duration::days(28)),
            ..lesson(vec![class.id, club.id], teacher.id)
        })
        .await?;

    assert_eq!(created.events.len(), 2);
    assert_eq!(created.total_created, 6);

    let repo = CalendarEventRepository::new(db);
    for details in &created.events {
        let instance_ids = repo.get_instance_ids(details.event.id).await?;
        assert_eq!(instance_ids.len(), 2);
        for id in instance_ids {
            let instance = repo.get_by_id(id).await?.unwrap();
            assert_eq!(instance.group_id, details.event.group_id);
        }
    }

    Ok(())
}

/// Tests that an unknown recurrence kind stores a standalone event.
///
/// Expected: total_created = 1, not recurring, no recurrence columns
#[tokio::test]
async fn unknown_recurrence_creates_standalone_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let created = service
        .create(CreateCalendarEventsParams {
            is_recurring: true,
            recurrence_type: Some("daily".to_string()),
            recurrence_end: Some(monday_nine() + Duration::days(10)),
            ..lesson(vec![group.id], teacher.id)
        })
        .await?;

    assert_eq!(created.total_created, 1);
    let event = &created.events[0].event;
    assert!(!event.is_recurring);
    assert!(event.recurrence_type.is_none());
    assert!(event.recurrence_end.is_none());

    Ok(())
}

/// Tests that a recurring event without an end stores a standalone event.
///
/// Expected: total_created = 1, not recurring
#[tokio::test]
async fn missing_recurrence_end_creates_standalone_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let created = service
        .create(CreateCalendarEventsParams {
            is_recurring: true,
            recurrence_type: Some("weekly".to_string()),
            recurrence_end: None,
            ..lesson(vec![group.id], teacher.id)
        })
        .await?;

    assert_eq!(created.total_created, 1);
    let event = &created.events[0].event;
    assert!(!event.is_recurring);
    assert!(event.recurrence_type.is_none());

    Ok(())
}

/// Tests that recurrence settings are dropped when the event is not recurring.
///
/// Expected: no recurrence columns and no instances
#[tokio::test]
async fn ignores_recurrence_for_non_recurring_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let created = service
        .create(CreateCalendarEventsParams {
            recurrence_type: Some("weekly".to_string()),
            recurrence_end: Some(monday_nine() + Duration::weeks(4)),
            ..lesson(vec![group.id], teacher.id)
        })
        .await?;

    assert_eq!(created.total_created, 1);
    let event = &created.events[0].event;
    assert!(event.recurrence_type.is_none());
    assert!(event.recurrence_end.is_none());

    Ok(())
}

#[tokio::test]
async fn rejects_empty_group_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::user::create_user_with_role(db, "teacher").await?;

    let service = CalendarEventService::new(db);
    let result = service.create(lesson(Vec::new(), teacher.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that start must come strictly before end.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_start_not_before_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let result = service
        .create(CreateCalendarEventsParams {
            end_time: monday_nine(),
            ..lesson(vec![group.id], teacher.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::CalendarEvent::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that a missing group aborts the whole request.
///
/// Expected: Err(AppError::NotFound) and no event written for the existing group
#[tokio::test]
async fn rejects_missing_group_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;

    let service = CalendarEventService::new(db);
    let result = service
        .create(lesson(vec![group.id, group.id + 50], teacher.id))
        .await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert!(message.contains(&(group.id + 50).to_string()))
        }
        other => panic!("Expected NotFound, got: {:?}", other),
    }
    assert!(entity::prelude::CalendarEvent::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
