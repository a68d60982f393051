//! Group factory for creating test groups and group memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::school_group::SchoolGroupFactory;
///
/// let club = SchoolGroupFactory::new(&db)
///     .name("Chess Club")
///     .kind("club")
///     .build()
///     .await?;
/// ```
pub struct SchoolGroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: String,
}

impl<'a> SchoolGroupFactory<'a> {
    /// Creates a new SchoolGroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Class {id}"` where id is auto-incremented
    /// - kind: `"class"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
            kind: "class".to_string(),
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group kind (`class` or `club`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::school_group::Model, DbErr> {
        entity::school_group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::school_group::Model, DbErr> {
    SchoolGroupFactory::new(db).build().await
}

/// Adds a user to a group.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user joining the group
/// - `group_id` - ID of the group being joined
///
/// # Returns
/// - `Ok(entity::user_group::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert (including unknown user or group)
pub async fn add_member(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::user_group::Model, DbErr> {
    entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}
