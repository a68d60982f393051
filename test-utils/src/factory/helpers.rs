//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together with
//! their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a teacher and a group the teacher belongs to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((teacher, group))` - The created teacher and group
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::school_group::Model), DbErr> {
    let teacher = crate::factory::user::UserFactory::new(db)
        .role("teacher")
        .build()
        .await?;
    let group = crate::factory::school_group::create_group(db).await?;
    crate::factory::school_group::add_member(db, teacher.id, group.id).await?;

    Ok((teacher, group))
}

/// Creates a teacher, a group the teacher belongs to, and a standalone event.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((teacher, group, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::school_group::Model,
        entity::calendar_event::Model,
    ),
    DbErr,
> {
    let (teacher, group) = create_event_dependencies(db).await?;
    let event = crate::factory::calendar_event::create_event(db, group.id, teacher.id).await?;

    Ok((teacher, group, event))
}
