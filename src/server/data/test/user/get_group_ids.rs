use super::*;

#[tokio::test]
async fn returns_groups_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::create_user(db).await?;
    let class = factory::school_group::create_group(db).await?;
    let club = factory::school_group::create_group(db).await?;
    let _unrelated = factory::school_group::create_group(db).await?;
    factory::school_group::add_member(db, student.id, class.id).await?;
    factory::school_group::add_member(db, student.id, club.id).await?;

    let repo = UserRepository::new(db);
    let mut group_ids = repo.get_group_ids(student.id).await?;
    group_ids.sort();

    assert_eq!(group_ids, vec![class.id, club.id]);

    Ok(())
}

#[tokio::test]
async fn returns_empty_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::create_user(db).await?;
    factory::school_group::create_group(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.get_group_ids(student.id).await?.is_empty());

    Ok(())
}
