use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Naive ISO date-time layouts accepted alongside RFC 3339, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses an event start or end time from a request.
///
/// Accepts RFC 3339 timestamps with an offset (`2024-01-01T09:00:00Z`,
/// `2024-01-01T10:00:00+01:00`) as well as naive ISO date-times without one
/// (`2024-01-01T09:00:00`, `2024-01-01T09:00`), which are taken to be UTC.
///
/// # Arguments
/// - `value` - Date-time string from the request body
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed time converted to UTC
/// - `Err(AppError::BadRequest)` - The value matches none of the accepted formats
pub fn parse_event_time(value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid datetime format: {}", value)))
}

/// Parses an optional date-time, passing `None` through.
pub fn parse_optional_event_time(value: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    value.map(parse_event_time).transpose()
}
