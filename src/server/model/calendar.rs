//! Domain models for calendar events and recurring series.
//!
//! A series is stored as one root row (`is_recurring = true`, with a recurrence kind and
//! end) plus generated instance rows pointing back at it through `parent_event_id`. The
//! link is a plain foreign key, never an owned reference.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::calendar::{
        CalendarEventDto, CreateCalendarEventDto, CreatedCalendarEventsDto, UpdateCalendarEventDto,
    },
    server::{
        error::AppError,
        util::parse::{parse_event_time, parse_optional_event_time},
    },
};

/// Step between consecutive occurrences of a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceKind {
    Weekly,
    Biweekly,
    /// Flat 30-day step, not calendar-month arithmetic.
    Monthly,
}

impl RecurrenceKind {
    /// Parses the stored recurrence name, returning `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "weekly" => Some(Self::Weekly),
            "biweekly" => Some(Self::Biweekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// Time between one occurrence and the next.
    pub fn step(&self) -> Duration {
        match self {
            Self::Weekly => Duration::days(7),
            Self::Biweekly => Duration::days(14),
            Self::Monthly => Duration::days(30),
        }
    }
}

/// Calendar event as stored, covering standalone events, series roots and instances.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    /// ID of the group the event belongs to.
    pub group_id: i32,
    /// ID of the user who created the event, if still known.
    pub created_by: Option<i32>,
    /// True only on series roots.
    pub is_recurring: bool,
    /// Raw recurrence name as stored; see [`CalendarEvent::recurrence_kind`].
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<DateTime<Utc>>,
    /// Series root this event was generated from.
    pub parent_event_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Converts an entity model to a calendar event domain model at the repository boundary.
    pub fn from_entity(entity: entity::calendar_event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            location: entity.location,
            group_id: entity.group_id,
            created_by: entity.created_by,
            is_recurring: entity.is_recurring,
            recurrence_type: entity.recurrence_type,
            recurrence_end: entity.recurrence_end,
            parent_event_id: entity.parent_event_id,
            created_at: entity.created_at,
        }
    }

    /// Recognised recurrence kind of this event, if any.
    pub fn recurrence_kind(&self) -> Option<RecurrenceKind> {
        self.recurrence_type
            .as_deref()
            .and_then(RecurrenceKind::from_name)
    }

    /// Time between start and end, preserved across a series.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Descriptor of a generated series instance, ready to be persisted.
///
/// Instances are never recurring themselves, so the flag is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInstance {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub group_id: i32,
    pub created_by: Option<i32>,
    pub parent_event_id: i32,
}

/// Calendar event enriched with the display names of its group and creator.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEventDetails {
    pub event: CalendarEvent,
    pub group_name: Option<String>,
    pub creator_name: Option<String>,
}

impl CalendarEventDetails {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CalendarEventDto {
        let event = self.event;
        CalendarEventDto {
            id: event.id,
            title: event.title,
            description: event.description,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location,
            group_id: event.group_id,
            group_name: self.group_name,
            created_by: event.created_by,
            creator_name: self.creator_name,
            is_recurring: event.is_recurring,
            recurrence_type: event.recurrence_type,
            recurrence_end: event.recurrence_end,
            parent_event_id: event.parent_event_id,
            created_at: event.created_at,
        }
    }
}

/// Parameters for inserting a single event row in one group.
#[derive(Debug, Clone)]
pub struct CreateCalendarEventParams {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub group_id: i32,
    pub created_by: Option<i32>,
    pub is_recurring: bool,
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<DateTime<Utc>>,
}

/// Parameters for creating the same event, recurring or not, in several groups.
#[derive(Debug, Clone)]
pub struct CreateCalendarEventsParams {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub group_ids: Vec<i32>,
    /// ID of the teacher or admin creating the events.
    pub created_by: i32,
    pub is_recurring: bool,
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<DateTime<Utc>>,
}

impl CreateCalendarEventsParams {
    /// Converts the request body into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateCalendarEventsParams)` - Parsed parameters
    /// - `Err(AppError::BadRequest)` - A date-time could not be parsed
    pub fn from_dto(created_by: i32, dto: CreateCalendarEventDto) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title,
            description: dto.description,
            start_time: parse_event_time(&dto.start_time)?,
            end_time: parse_event_time(&dto.end_time)?,
            location: dto.location,
            group_ids: dto.group_ids,
            created_by,
            is_recurring: dto.is_recurring,
            recurrence_type: dto.recurrence_type,
            recurrence_end: parse_optional_event_time(dto.recurrence_end.as_deref())?,
        })
    }

    /// Builds the row parameters for one of the selected groups.
    ///
    /// The row is a series root only when the recurrence kind is known and an end is set;
    /// otherwise it is stored as a standalone event without recurrence columns.
    pub fn for_group(&self, group_id: i32) -> CreateCalendarEventParams {
        let is_recurring = self.is_recurring
            && self.recurrence_end.is_some()
            && self
                .recurrence_type
                .as_deref()
                .and_then(RecurrenceKind::from_name)
                .is_some();

        let (recurrence_type, recurrence_end) = if is_recurring {
            (self.recurrence_type.clone(), self.recurrence_end)
        } else {
            (None, None)
        };

        CreateCalendarEventParams {
            title: self.title.clone(),
            description: self.description.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location.clone(),
            group_id,
            created_by: Some(self.created_by),
            is_recurring,
            recurrence_type,
            recurrence_end,
        }
    }
}

/// Result of creating an event in several groups.
#[derive(Debug, Clone)]
pub struct CreatedCalendarEvents {
    /// Rows written, series instances included.
    pub total_created: u64,
    /// One entry per group: the standalone event or the series root.
    pub events: Vec<CalendarEventDetails>,
}

/// Parameters for a partial event update.
///
/// All fields besides `id` are optional; only provided fields are changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateCalendarEventParams {
    pub id: i32,
    pub title: Option<String>,
    /// Outer Option indicates field presence, inner for nullable value.
    pub description: Option<Option<String>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Outer Option indicates field presence, inner for nullable value.
    pub location: Option<Option<String>>,
    pub group_id: Option<i32>,
}

impl UpdateCalendarEventParams {
    pub fn from_dto(id: i32, dto: UpdateCalendarEventDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            title: dto.title,
            description: dto.description,
            start_time: parse_optional_event_time(dto.start_time.as_deref())?,
            end_time: parse_optional_event_time(dto.end_time.as_deref())?,
            location: dto.location,
            group_id: dto.group_id,
        })
    }
}

/// Parameters for importing an iCalendar document into a group.
#[derive(Debug, Clone)]
pub struct ImportCalendarParams {
    pub group_id: i32,
    /// ID of the admin performing the import, recorded as creator.
    pub created_by: i32,
    /// Raw iCalendar text.
    pub content: String,
}

impl CreatedCalendarEvents {
    pub fn into_dto(self) -> CreatedCalendarEventsDto {
        CreatedCalendarEventsDto {
            total_created: self.total_created,
            group_count: self.events.len() as u64,
            events: self
                .events
                .into_iter()
                .map(CalendarEventDetails::into_dto)
                .collect(),
        }
    }
}

/// Event read from an iCalendar `VEVENT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
