use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalendarEventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub group_id: i32,
    pub group_name: Option<String>,
    pub created_by: Option<i32>,
    pub creator_name: Option<String>,
    pub is_recurring: bool,
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<DateTime<Utc>>,
    pub parent_event_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalendarEventListDto {
    pub events: Vec<CalendarEventDto>,
}

/// Request body for creating an event in one or more groups.
///
/// Times are accepted either as RFC 3339 timestamps or as naive ISO date-times
/// (`YYYY-MM-DDTHH:MM[:SS]`), the latter interpreted as UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCalendarEventDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    pub group_ids: Vec<i32>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_type: Option<String>,
    #[serde(default)]
    pub recurrence_end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedCalendarEventsDto {
    /// Number of rows written, series instances included.
    pub total_created: u64,
    pub group_count: u64,
    /// The event created in each group (series roots for recurring events).
    pub events: Vec<CalendarEventDto>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCalendarEventDto {
    #[serde(default)]
    pub title: Option<String>,
    /// `null` clears the description; an absent field leaves it unchanged.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// `null` clears the location; an absent field leaves it unchanged.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub group_id: Option<i32>,
}

/// Keeps an explicit `null` apart from a missing field.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteCalendarEventQuery {
    #[serde(default)]
    pub delete_series: bool,
}

impl DeleteCalendarEventQuery {
    /// Whether the whole series is to be removed, set either in the query string or in
    /// a JSON body.
    pub fn delete_series_with(&self, body: Option<&DeleteCalendarEventDto>) -> bool {
        self.delete_series || body.is_some_and(|body| body.delete_series)
    }
}

/// JSON body accepted by `DELETE /api/calendar/{event_id}` for clients that do not use
/// the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteCalendarEventDto {
    #[serde(default)]
    pub delete_series: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedCalendarEventsDto {
    pub deleted: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportCalendarQuery {
    pub group_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportedCalendarEventsDto {
    pub imported: u64,
}
