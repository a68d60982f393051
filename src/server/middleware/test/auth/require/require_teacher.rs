use super::*;

/// Tests that teachers and admins both pass the teacher check.
///
/// Expected: Ok(User) for each
#[tokio::test]
async fn grants_access_to_teacher_and_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::user::create_user_with_role(db, "teacher").await?;
    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(teacher.id).await?;
    assert_eq!(
        auth_guard.require(&[Permission::Teacher]).await?.role,
        Role::Teacher
    );

    auth_session.set_user_id(admin.id).await?;
    assert_eq!(
        auth_guard.require(&[Permission::Teacher]).await?.role,
        Role::Admin
    );

    Ok(())
}

/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_student() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(student.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Teacher]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
