//! Calendar event fixtures for creating in-memory test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::calendar_event;

/// Default test event title.
pub const DEFAULT_TITLE: &str = "Mathematics";

/// Default test event location.
pub const DEFAULT_LOCATION: &str = "Room 101";

/// Default owning group ID.
pub const DEFAULT_GROUP_ID: i32 = 1;

/// Default creator ID.
pub const DEFAULT_CREATED_BY: i32 = 1;

/// Default start time: 2024-01-01 09:00 UTC.
pub fn default_start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// Creates a standalone one-hour calendar event model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Mathematics"`
/// - start_time: 2024-01-01 09:00 UTC, end_time: 10:00 UTC
/// - location: `Some("Room 101")`
/// - group_id: `1`, created_by: `Some(1)`
/// - not recurring, no parent
pub fn entity() -> calendar_event::Model {
    entity_builder().build()
}

/// Creates a calendar event entity builder for customization.
pub fn entity_builder() -> CalendarEventEntityBuilder {
    CalendarEventEntityBuilder::default()
}

/// Builder for creating customized calendar event entity models.
pub struct CalendarEventEntityBuilder {
    model: calendar_event::Model,
}

impl Default for CalendarEventEntityBuilder {
    fn default() -> Self {
        let start_time = default_start_time();
        Self {
            model: calendar_event::Model {
                id: 1,
                title: DEFAULT_TITLE.to_string(),
                description: Some("Chapter 3".to_string()),
                start_time,
                end_time: start_time + Duration::hours(1),
                location: Some(DEFAULT_LOCATION.to_string()),
                group_id: DEFAULT_GROUP_ID,
                created_by: Some(DEFAULT_CREATED_BY),
                is_recurring: false,
                recurrence_type: None,
                recurrence_end: None,
                parent_event_id: None,
                created_at: start_time,
            },
        }
    }
}

impl CalendarEventEntityBuilder {
    /// Sets the event ID.
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    /// Sets the start and end time.
    pub fn times(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.model.start_time = start_time;
        self.model.end_time = end_time;
        self
    }

    /// Marks the event as a series root.
    pub fn recurrence(mut self, kind: impl Into<String>, end: DateTime<Utc>) -> Self {
        self.model.is_recurring = true;
        self.model.recurrence_type = Some(kind.into());
        self.model.recurrence_end = Some(end);
        self
    }

    /// Sets the raw recurrence columns without touching `is_recurring`.
    pub fn recurrence_columns(
        mut self,
        kind: Option<String>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.model.recurrence_type = kind;
        self.model.recurrence_end = end;
        self
    }

    /// Marks the event as an instance of the given root.
    pub fn parent_event_id(mut self, parent_event_id: i32) -> Self {
        self.model.is_recurring = false;
        self.model.parent_event_id = Some(parent_event_id);
        self
    }

    /// Builds the calendar event entity model.
    pub fn build(self) -> calendar_event::Model {
        self.model
    }
}
