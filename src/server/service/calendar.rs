//! Calendar event service.
//!
//! Orchestrates listing, creating, updating, deleting and importing calendar events.
//! Authorization (role, group membership and event ownership) is checked by `AuthGuard`
//! in the controller before these methods are called; the service enforces existence
//! and validity rules and keeps multi-row writes inside a single transaction.

pub mod ics;
pub mod recurrence;

use std::collections::{BTreeSet, HashMap};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{calendar_event::CalendarEventRepository, group::GroupRepository, user::UserRepository},
    error::AppError,
    model::{
        calendar::{
            CalendarEvent, CalendarEventDetails, CreateCalendarEventParams,
            CreateCalendarEventsParams, CreatedCalendarEvents, ImportCalendarParams,
            UpdateCalendarEventParams,
        },
        user::User,
    },
    service::calendar::recurrence::{deletion_scope, expand, DeletionScope},
};

pub struct CalendarEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the events visible to a user.
    ///
    /// Admins see every event. Other users see the events of the groups they belong to.
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarEventDetails>)` - Events ordered by start time, with group and
    ///   creator names
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_for_user(&self, user: &User) -> Result<Vec<CalendarEventDetails>, AppError> {
        let event_repo = CalendarEventRepository::new(self.db);

        let events = if user.is_admin() {
            event_repo.get_all().await?
        } else {
            let group_ids = UserRepository::new(self.db).get_group_ids(user.id).await?;
            event_repo.get_by_group_ids(&group_ids).await?
        };

        Ok(self.with_details(events).await?)
    }

    /// Creates an event, or a recurring series, in each of the selected groups.
    ///
    /// For every group a standalone event or series root is inserted first; for recurring
    /// events the generated instances follow, pointing at that root. Everything is written
    /// in one transaction, so a failure leaves no partial series behind.
    ///
    /// A recurring event whose kind is unknown or whose end is missing is stored as a
    /// standalone event.
    ///
    /// # Returns
    /// - `Ok(CreatedCalendarEvents)` - One event per group plus the total rows written
    /// - `Err(AppError::BadRequest)` - No group selected, or start is not before end
    /// - `Err(AppError::NotFound)` - One of the groups does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(
        &self,
        params: CreateCalendarEventsParams,
    ) -> Result<CreatedCalendarEvents, AppError> {
        if params.group_ids.is_empty() {
            return Err(AppError::BadRequest(
                "At least one group must be selected".to_string(),
            ));
        }
        if params.start_time >= params.end_time {
            return Err(AppError::BadRequest(
                "Start time must be before end time".to_string(),
            ));
        }

        self.ensure_groups_exist(&params.group_ids).await?;

        let txn = self.db.begin().await?;
        let event_repo = CalendarEventRepository::new(&txn);

        let mut total_created = 0;
        let mut roots = Vec::with_capacity(params.group_ids.len());

        for group_id in &params.group_ids {
            let root = event_repo.create(params.for_group(*group_id)).await?;
            total_created += 1;

            if root.is_recurring {
                let instances = expand(&root);
                tracing::debug!(
                    "Expanding event {} into {} instances",
                    root.id,
                    instances.len()
                );
                total_created += event_repo.create_instances(instances).await?;
            }

            roots.push(root);
        }

        txn.commit().await?;

        tracing::info!(
            "Created {} calendar events across {} groups",
            total_created,
            params.group_ids.len()
        );

        Ok(CreatedCalendarEvents {
            total_created,
            events: self.with_details(roots).await?,
        })
    }

    /// Applies a partial update to an event.
    ///
    /// Series roots are updated in place; their instances are neither regenerated nor
    /// changed.
    ///
    /// # Returns
    /// - `Ok(CalendarEventDetails)` - The updated event
    /// - `Err(AppError::NotFound)` - The event or the new group does not exist
    /// - `Err(AppError::BadRequest)` - The resulting start is not before the end
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateCalendarEventParams,
    ) -> Result<CalendarEventDetails, AppError> {
        let event_repo = CalendarEventRepository::new(self.db);

        let Some(existing) = event_repo.get_by_id(params.id).await? else {
            return Err(AppError::NotFound("Event not found".to_string()));
        };

        if let Some(group_id) = params.group_id {
            if GroupRepository::new(self.db)
                .find_by_id(group_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Group not found".to_string()));
            }
        }

        let start_time = params.start_time.unwrap_or(existing.start_time);
        let end_time = params.end_time.unwrap_or(existing.end_time);
        if start_time >= end_time {
            return Err(AppError::BadRequest(
                "Start time must be before end time".to_string(),
            ));
        }

        let updated = event_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        self.with_details(vec![updated])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Updated event missing details".to_string()))
    }

    /// Deletes an event, or the whole series it belongs to.
    ///
    /// With `delete_series`, targeting a root or any of its instances removes the root and
    /// every instance. Without it, only the target is removed; deleting a root on its own
    /// leaves its instances as standalone events.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of events removed
    /// - `Err(AppError::NotFound)` - The event does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing was removed
    pub async fn delete(&self, event_id: i32, delete_series: bool) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;
        let event_repo = CalendarEventRepository::new(&txn);

        let Some(target) = event_repo.get_by_id(event_id).await? else {
            return Err(AppError::NotFound("Event not found".to_string()));
        };

        let ids: Vec<i32> = Self::resolve_delete(&event_repo, &target, delete_series)
            .await?
            .into_iter()
            .collect();
        let deleted = event_repo.delete_many(&ids).await?;

        txn.commit().await?;

        tracing::info!("Deleted {} calendar events starting from {}", deleted, event_id);

        Ok(deleted)
    }

    /// Resolves the IDs removed by a delete request.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<i32>)` - The target alone, or the series root and all its instances
    /// - `Err(DbErr)` - Database error while loading the instances
    pub async fn resolve_delete<C: ConnectionTrait>(
        event_repo: &CalendarEventRepository<'_, C>,
        target: &CalendarEvent,
        delete_series: bool,
    ) -> Result<BTreeSet<i32>, DbErr> {
        match deletion_scope(target, delete_series) {
            DeletionScope::Single(id) => Ok(BTreeSet::from([id])),
            DeletionScope::Series { root_id } => {
                let mut ids: BTreeSet<i32> =
                    event_repo.get_instance_ids(root_id).await?.into_iter().collect();
                ids.insert(root_id);
                Ok(ids)
            }
        }
    }

    /// Imports the events of an iCalendar document into a group.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of events imported
    /// - `Err(AppError::NotFound)` - The group does not exist
    /// - `Err(AppError::BadRequest)` - The document could not be parsed
    /// - `Err(AppError::DbErr)` - Database error; nothing was imported
    pub async fn import_ics(&self, params: ImportCalendarParams) -> Result<u64, AppError> {
        if GroupRepository::new(self.db)
            .find_by_id(params.group_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        let events = ics::parse_events(&params.content)?;

        let txn = self.db.begin().await?;
        let event_repo = CalendarEventRepository::new(&txn);

        let mut imported = 0;
        for event in events {
            event_repo
                .create(CreateCalendarEventParams {
                    title: event.title,
                    description: event.description,
                    start_time: event.start_time,
                    end_time: event.end_time,
                    location: event.location,
                    group_id: params.group_id,
                    created_by: Some(params.created_by),
                    is_recurring: false,
                    recurrence_type: None,
                    recurrence_end: None,
                })
                .await?;
            imported += 1;
        }

        txn.commit().await?;

        tracing::info!(
            "Imported {} calendar events into group {}",
            imported,
            params.group_id
        );

        Ok(imported)
    }

    async fn ensure_groups_exist(&self, group_ids: &[i32]) -> Result<(), AppError> {
        let found: BTreeSet<i32> = GroupRepository::new(self.db)
            .find_by_ids(group_ids)
            .await?
            .into_iter()
            .map(|group| group.id)
            .collect();

        match group_ids.iter().find(|id| !found.contains(*id)) {
            Some(missing) => Err(AppError::NotFound(format!("Group {} not found", missing))),
            None => Ok(()),
        }
    }

    /// Attaches group and creator names to events, preserving order.
    async fn with_details(
        &self,
        events: Vec<CalendarEvent>,
    ) -> Result<Vec<CalendarEventDetails>, DbErr> {
        let group_ids: Vec<i32> = events
            .iter()
            .map(|e| e.group_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let creator_ids: Vec<i32> = events
            .iter()
            .filter_map(|e| e.created_by)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let group_names: HashMap<i32, String> = GroupRepository::new(self.db)
            .find_by_ids(&group_ids)
            .await?
            .into_iter()
            .map(|group| (group.id, group.name))
            .collect();
        let creator_names: HashMap<i32, String> = UserRepository::new(self.db)
            .find_by_ids(&creator_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        Ok(events
            .into_iter()
            .map(|event| CalendarEventDetails {
                group_name: group_names.get(&event.group_id).cloned(),
                creator_name: event
                    .created_by
                    .and_then(|id| creator_names.get(&id).cloned()),
                event,
            })
            .collect())
    }
}
