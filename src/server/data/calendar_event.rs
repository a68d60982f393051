//! Calendar event data repository.
//!
//! Provides the `CalendarEventRepository` for storing series roots, their generated
//! instances and standalone events. The repository is generic over the connection so the
//! service can run multi-row writes inside a single transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::calendar::{
    CalendarEvent, CreateCalendarEventParams, EventInstance, UpdateCalendarEventParams,
};

pub struct CalendarEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CalendarEventRepository<'a, C> {
    /// Creates a new CalendarEventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a standalone event or a series root.
    ///
    /// The returned event carries the identifier assigned by the database, which series
    /// instances then reference as their parent.
    ///
    /// # Returns
    /// - `Ok(CalendarEvent)` - The created event
    /// - `Err(DbErr)` - Database error, e.g. a missing group
    pub async fn create(&self, params: CreateCalendarEventParams) -> Result<CalendarEvent, DbErr> {
        let entity = entity::calendar_event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            location: ActiveValue::Set(params.location),
            group_id: ActiveValue::Set(params.group_id),
            created_by: ActiveValue::Set(params.created_by),
            is_recurring: ActiveValue::Set(params.is_recurring),
            recurrence_type: ActiveValue::Set(params.recurrence_type),
            recurrence_end: ActiveValue::Set(params.recurrence_end),
            parent_event_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CalendarEvent::from_entity(entity))
    }

    /// Inserts generated series instances.
    ///
    /// # Arguments
    /// - `instances` - Descriptors produced by series expansion
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of instances inserted
    /// - `Err(DbErr)` - Database error; earlier inserts are only undone if the caller
    ///   runs this inside a transaction
    pub async fn create_instances(&self, instances: Vec<EventInstance>) -> Result<u64, DbErr> {
        let mut created = 0;

        for instance in instances {
            entity::calendar_event::ActiveModel {
                title: ActiveValue::Set(instance.title),
                description: ActiveValue::Set(instance.description),
                start_time: ActiveValue::Set(instance.start_time),
                end_time: ActiveValue::Set(instance.end_time),
                location: ActiveValue::Set(instance.location),
                group_id: ActiveValue::Set(instance.group_id),
                created_by: ActiveValue::Set(instance.created_by),
                is_recurring: ActiveValue::Set(false),
                recurrence_type: ActiveValue::Set(None),
                recurrence_end: ActiveValue::Set(None),
                parent_event_id: ActiveValue::Set(Some(instance.parent_event_id)),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created += 1;
        }

        Ok(created)
    }

    /// Gets an event by ID.
    ///
    /// # Returns
    /// - `Ok(Some(CalendarEvent))` - Event found
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CalendarEvent>, DbErr> {
        let entity = entity::prelude::CalendarEvent::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(CalendarEvent::from_entity))
    }

    /// Gets the IDs of every instance generated from a series root.
    pub async fn get_instance_ids(&self, parent_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CalendarEvent::find()
            .select_only()
            .column(entity::calendar_event::Column::Id)
            .filter(entity::calendar_event::Column::ParentEventId.eq(parent_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets every event, ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<CalendarEvent>, DbErr> {
        let entities = entity::prelude::CalendarEvent::find()
            .order_by_asc(entity::calendar_event::Column::StartTime)
            .order_by_asc(entity::calendar_event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CalendarEvent::from_entity).collect())
    }

    /// Gets the events belonging to any of the given groups, ordered by start time.
    ///
    /// # Arguments
    /// - `group_ids` - Groups to include; an empty slice yields no events
    pub async fn get_by_group_ids(&self, group_ids: &[i32]) -> Result<Vec<CalendarEvent>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::CalendarEvent::find()
            .filter(entity::calendar_event::Column::GroupId.is_in(group_ids.iter().copied()))
            .order_by_asc(entity::calendar_event::Column::StartTime)
            .order_by_asc(entity::calendar_event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CalendarEvent::from_entity).collect())
    }

    /// Applies a partial update to an event.
    ///
    /// Only fields present in `params` are written. Recurrence columns and the parent link
    /// are never touched, so updating a root does not alter its existing instances.
    ///
    /// # Returns
    /// - `Ok(Some(CalendarEvent))` - The updated event
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateCalendarEventParams,
    ) -> Result<Option<CalendarEvent>, DbErr> {
        let Some(entity) = entity::prelude::CalendarEvent::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(start_time) = params.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(group_id) = params.group_id {
            active_model.group_id = ActiveValue::Set(group_id);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(CalendarEvent::from_entity(entity)))
    }

    /// Deletes the events with the given IDs.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CalendarEvent::delete_many()
            .filter(entity::calendar_event::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
