//! iCalendar import parsing.
//!
//! Only `VEVENT` components are read. Each event becomes a standalone calendar event;
//! recurrence rules inside the document are not expanded.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ical::parser::ical::component::IcalEvent;

use crate::server::{error::AppError, model::calendar::ImportedEvent};

/// Title used when a `VEVENT` has no `SUMMARY`.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Parses every `VEVENT` in an iCalendar document.
///
/// `DTSTART` and `DTEND` are required on each event. Times are read as UTC whether they
/// carry a `Z` suffix or not; `TZID` parameters are ignored. Date-only values start at
/// midnight.
///
/// # Returns
/// - `Ok(Vec<ImportedEvent>)` - Events in document order
/// - `Err(AppError::BadRequest)` - Malformed document, missing or unparseable times, or an
///   event that does not end after it starts
pub fn parse_events(content: &str) -> Result<Vec<ImportedEvent>, AppError> {
    let mut events = Vec::new();

    for calendar in ical::IcalParser::new(content.as_bytes()) {
        let calendar = calendar
            .map_err(|e| AppError::BadRequest(format!("Invalid iCalendar file: {}", e)))?;

        for event in &calendar.events {
            events.push(parse_event(event)?);
        }
    }

    Ok(events)
}

fn parse_event(event: &IcalEvent) -> Result<ImportedEvent, AppError> {
    let mut title = None;
    let mut description = None;
    let mut location = None;
    let mut start_time = None;
    let mut end_time = None;

    for property in &event.properties {
        let Some(value) = property.value.as_deref() else {
            continue;
        };

        match property.name.as_str() {
            "SUMMARY" => title = Some(unescape_text(value)),
            "DESCRIPTION" => description = Some(unescape_text(value)),
            "LOCATION" => location = Some(unescape_text(value)),
            "DTSTART" => start_time = Some(parse_ical_time(value)?),
            "DTEND" => end_time = Some(parse_ical_time(value)?),
            _ => {}
        }
    }

    let (Some(start_time), Some(end_time)) = (start_time, end_time) else {
        return Err(AppError::BadRequest(
            "Every event must have DTSTART and DTEND".to_string(),
        ));
    };

    if start_time >= end_time {
        return Err(AppError::BadRequest(format!(
            "Event starting at {} does not end after it starts",
            start_time
        )));
    }

    Ok(ImportedEvent {
        title: title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: description.filter(|d| !d.is_empty()),
        location: location.filter(|l| !l.is_empty()),
        start_time,
        end_time,
    })
}

fn parse_ical_time(value: &str) -> Result<DateTime<Utc>, AppError> {
    let trimmed = value.trim_end_matches('Z');

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y%m%dT%H%M%S") {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y%m%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid iCalendar date-time: {}", value)))
}

/// Reverses RFC 5545 text escaping.
fn unescape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => result.push('\n'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}
