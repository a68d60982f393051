//! Calendar event factory for creating test events.
//!
//! Supports standalone events, recurring series roots and generated instances through
//! the builder setters for `is_recurring`, `recurrence` and `parent_event_id`.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test calendar events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::calendar_event::CalendarEventFactory;
///
/// let root = CalendarEventFactory::new(&db, group.id, teacher.id)
///     .title("Maths")
///     .recurrence("weekly", end)
///     .build()
///     .await?;
/// ```
pub struct CalendarEventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    location: Option<String>,
    group_id: i32,
    created_by: Option<i32>,
    is_recurring: bool,
    recurrence_type: Option<String>,
    recurrence_end: Option<DateTime<Utc>>,
    parent_event_id: Option<i32>,
}

impl<'a> CalendarEventFactory<'a> {
    /// Creates a new CalendarEventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Lesson {id}"` where id is auto-incremented
    /// - start_time: 2024-01-01 09:00 UTC, end_time one hour later
    /// - description, location: `None`
    /// - not recurring, no parent
    pub fn new(db: &'a DatabaseConnection, group_id: i32, created_by: i32) -> Self {
        let id = next_id();
        let start_time = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        Self {
            db,
            title: format!("Lesson {}", id),
            description: None,
            start_time,
            end_time: start_time + Duration::hours(1),
            location: None,
            group_id,
            created_by: Some(created_by),
            is_recurring: false,
            recurrence_type: None,
            recurrence_end: None,
            parent_event_id: None,
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the start and end time of the event.
    pub fn times(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets the event location.
    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Sets the creator of the event.
    pub fn created_by(mut self, created_by: Option<i32>) -> Self {
        self.created_by = created_by;
        self
    }

    /// Marks the event as a series root with the given recurrence kind and end.
    pub fn recurrence(mut self, kind: impl Into<String>, end: DateTime<Utc>) -> Self {
        self.is_recurring = true;
        self.recurrence_type = Some(kind.into());
        self.recurrence_end = Some(end);
        self
    }

    /// Marks the event as a generated instance of the given root.
    pub fn parent_event_id(mut self, parent_event_id: i32) -> Self {
        self.is_recurring = false;
        self.parent_event_id = Some(parent_event_id);
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::calendar_event::Model, DbErr> {
        entity::calendar_event::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            location: ActiveValue::Set(self.location),
            group_id: ActiveValue::Set(self.group_id),
            created_by: ActiveValue::Set(self.created_by),
            is_recurring: ActiveValue::Set(self.is_recurring),
            recurrence_type: ActiveValue::Set(self.recurrence_type),
            recurrence_end: ActiveValue::Set(self.recurrence_end),
            parent_event_id: ActiveValue::Set(self.parent_event_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standalone one-hour event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    group_id: i32,
    created_by: i32,
) -> Result<entity::calendar_event::Model, DbErr> {
    CalendarEventFactory::new(db, group_id, created_by)
        .build()
        .await
}

/// Creates a weekly series root with `count` instances already persisted.
///
/// The root starts on the factory default date and the instances follow it at
/// one-week intervals, mirroring what series creation stores.
///
/// # Returns
/// - `Ok((root, instances))` - The root and its instances in start-time order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_weekly_series(
    db: &DatabaseConnection,
    group_id: i32,
    created_by: i32,
    count: i64,
) -> Result<
    (
        entity::calendar_event::Model,
        Vec<entity::calendar_event::Model>,
    ),
    DbErr,
> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let root = CalendarEventFactory::new(db, group_id, created_by)
        .title("Weekly lesson")
        .times(start, start + Duration::hours(1))
        .recurrence("weekly", start + Duration::weeks(count))
        .build()
        .await?;

    let mut instances = Vec::new();
    for k in 1..=count {
        let instance_start = start + Duration::weeks(k);
        let instance = CalendarEventFactory::new(db, group_id, created_by)
            .title("Weekly lesson")
            .times(instance_start, instance_start + Duration::hours(1))
            .parent_event_id(root.id)
            .build()
            .await?;
        instances.push(instance);
    }

    Ok((root, instances))
}
