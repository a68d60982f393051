use crate::server::{
    data::calendar_event::CalendarEventRepository,
    error::AppError,
    model::{
        calendar::{CreateCalendarEventsParams, ImportCalendarParams, UpdateCalendarEventParams},
        user::User,
    },
    service::calendar::CalendarEventService,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn monday_nine() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// One-hour lesson on 2024-01-01 for the given groups, not recurring.
fn lesson(group_ids: Vec<i32>, created_by: i32) -> CreateCalendarEventsParams {
    CreateCalendarEventsParams {
        title: "Algebra".to_string(),
        description: Some("Chapter 4".to_string()),
        start_time: monday_nine(),
        end_time: monday_nine() + Duration::hours(1),
        location: Some("Room 12".to_string()),
        group_ids,
        created_by,
        is_recurring: false,
        recurrence_type: None,
        recurrence_end: None,
    }
}
