//! User data repository.
//!
//! Users are provisioned by the external identity provider; this repository only reads
//! them and their group memberships.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use crate::server::model::user::User;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error or an unknown stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds every user whose ID is in `ids`, skipping unknown IDs.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets the IDs of the groups a user belongs to.
    pub async fn get_group_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserGroup::find()
            .select_only()
            .column(entity::user_group::Column::GroupId)
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Checks whether a user is a member of a group.
    pub async fn is_member(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
