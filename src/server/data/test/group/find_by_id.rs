use super::*;

#[tokio::test]
async fn returns_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::school_group::SchoolGroupFactory::new(db)
        .name("Chess club")
        .kind("club")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let group = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(group.name, "Chess club");
    assert_eq!(group.kind, "club");

    Ok(())
}

#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(repo.find_by_id(3).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn find_by_ids_returns_known_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::school_group::create_group(db).await?;
    let second = factory::school_group::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.find_by_ids(&[first.id, second.id, 77]).await?;

    assert_eq!(groups.len(), 2);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
