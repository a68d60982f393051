use super::*;

fn instances(root_id: i32, group_id: i32, created_by: i32, count: i64) -> Vec<EventInstance> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    (1..=count)
        .map(|k| EventInstance {
            title: "Weekly lesson".to_string(),
            description: None,
            start_time: start + Duration::weeks(k),
            end_time: start + Duration::weeks(k) + Duration::hours(1),
            location: None,
            group_id,
            created_by: Some(created_by),
            parent_event_id: root_id,
        })
        .collect()
}

/// Tests inserting generated instances for a root.
///
/// Verifies that each instance is linked to the root and stored as non-recurring.
///
/// Expected: Ok(3) and three rows pointing at the root
#[tokio::test]
async fn inserts_instances_linked_to_root() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let root = factory::calendar_event::CalendarEventFactory::new(db, group.id, teacher.id)
        .recurrence("weekly", Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).unwrap())
        .build()
        .await?;

    let repo = CalendarEventRepository::new(db);
    let created = repo
        .create_instances(instances(root.id, group.id, teacher.id, 3))
        .await?;

    assert_eq!(created, 3);

    let stored = entity::prelude::CalendarEvent::find().all(db).await?;
    let children: Vec<_> = stored
        .iter()
        .filter(|e| e.parent_event_id == Some(root.id))
        .collect();
    assert_eq!(children.len(), 3);
    assert!(children
        .iter()
        .all(|e| !e.is_recurring && e.recurrence_type.is_none()));

    Ok(())
}

#[tokio::test]
async fn empty_input_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEventRepository::new(db);
    let created = repo.create_instances(Vec::new()).await?;

    assert_eq!(created, 0);

    Ok(())
}

/// Tests that instances written inside a dropped transaction are discarded.
///
/// Expected: no rows remain after the transaction is dropped without commit
#[tokio::test]
async fn rolls_back_with_uncommitted_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let root = factory::calendar_event::create_event(db, group.id, teacher.id).await?;

    {
        let txn = db.begin().await?;
        let repo = CalendarEventRepository::new(&txn);
        repo.create_instances(instances(root.id, group.id, teacher.id, 2))
            .await?;
        txn.rollback().await?;
    }

    let stored = entity::prelude::CalendarEvent::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}
