//! School group data repository.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::group::SchoolGroup;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a group by ID.
    ///
    /// # Returns
    /// - `Ok(Some(SchoolGroup))` - Group found
    /// - `Ok(None)` - No group with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<SchoolGroup>, DbErr> {
        let entity = entity::prelude::SchoolGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(SchoolGroup::from_entity))
    }

    /// Finds every group whose ID is in `ids`, skipping unknown IDs.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<SchoolGroup>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::SchoolGroup::find()
            .filter(entity::school_group::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SchoolGroup::from_entity).collect())
    }
}
