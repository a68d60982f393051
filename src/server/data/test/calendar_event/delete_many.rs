use super::*;

/// Tests deleting a whole series.
///
/// Expected: Ok(4) and no rows left
#[tokio::test]
async fn deletes_root_and_instances() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group) = factory::helpers::create_event_dependencies(db).await?;
    let (root, instances) =
        factory::calendar_event::create_weekly_series(db, group.id, teacher.id, 3).await?;

    let mut ids = vec![root.id];
    ids.extend(instances.iter().map(|i| i.id));

    let repo = CalendarEventRepository::new(db);
    let deleted = repo.delete_many(&ids).await?;

    assert_eq!(deleted, 4);
    assert!(entity::prelude::CalendarEvent::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deleting a root on its own.
///
/// Verifies that the remaining instances survive with their parent link cleared.
///
/// Expected: Ok(1), instances become standalone events
#[tokio::test]
async fn deleting_root_alone_detaches_instances() -> Result<(), DbErr> {
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
    let deleted = repo.delete_many(&[root.id]).await?;

    assert_eq!(deleted, 1);
    for instance in instances {
        let remaining = repo.get_by_id(instance.id).await?.unwrap();
        assert!(remaining.parent_event_id.is_none());
    }

    Ok(())
}

#[tokio::test]
async fn ignores_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_calendar_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_teacher, _group, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = CalendarEventRepository::new(db);
    let deleted = repo.delete_many(&[event.id + 100]).await?;

    assert_eq!(deleted, 0);
    assert!(repo.get_by_id(event.id).await?.is_some());

    Ok(())
}
