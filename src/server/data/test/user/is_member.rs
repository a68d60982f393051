use super::*;

/// Tests membership checks.
///
/// Expected: true for the joined group, false for the other one
#[tokio::test]
async fn reports_membership_per_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::user::create_user(db).await?;
    let joined = factory::school_group::create_group(db).await?;
    let other = factory::school_group::create_group(db).await?;
    factory::school_group::add_member(db, student.id, joined.id).await?;

    let repo = UserRepository::new(db);

    assert!(repo.is_member(student.id, joined.id).await?);
    assert!(!repo.is_member(student.id, other.id).await?);

    Ok(())
}
