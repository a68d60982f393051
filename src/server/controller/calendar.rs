use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        calendar::{
            CalendarEventDto, CalendarEventListDto, CreateCalendarEventDto,
            CreatedCalendarEventsDto, DeleteCalendarEventDto, DeleteCalendarEventQuery,
            DeletedCalendarEventsDto,
            ImportCalendarQuery, ImportedCalendarEventsDto, UpdateCalendarEventDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::calendar::{
            CalendarEventDetails, CreateCalendarEventsParams, ImportCalendarParams,
            UpdateCalendarEventParams,
        },
        service::calendar::CalendarEventService,
        state::AppState,
    },
};

/// Tag for grouping calendar endpoints in OpenAPI documentation
pub static CALENDAR_TAG: &str = "calendar";

/// List calendar events visible to the current user.
///
/// Admins receive every event; other users receive the events of the groups they
/// belong to. Events are ordered by start time.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Visible events
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/calendar",
    tag = CALENDAR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved events", body = CalendarEventListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CalendarEventService::new(&state.db);
    let events = service.list_for_user(&user).await?;

    Ok((
        StatusCode::OK,
        Json(CalendarEventListDto {
            events: events
                .into_iter()
                .map(CalendarEventDetails::into_dto)
                .collect(),
        }),
    ))
}

/// Create an event, or a recurring series, in one or more groups.
///
/// The creator must be a member of every selected group. Recurring events are stored
/// as a root per group followed by up to 52 generated instances.
///
/// # Access Control
/// - `Teacher` - Teachers and admins
/// - `GroupMember` - For each selected group
///
/// # Returns
/// - `201 Created` - Events created
/// - `400 Bad Request` - No group, invalid date-time, or start not before end
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Not a teacher, or not a member of a selected group
/// - `404 Not Found` - A selected group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/calendar",
    tag = CALENDAR_TAG,
    request_body = CreateCalendarEventDto,
    responses(
        (status = 201, description = "Successfully created events", body = CreatedCalendarEventsDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not create events in these groups", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCalendarEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let mut permissions = vec![Permission::Teacher];
    permissions.extend(payload.group_ids.iter().copied().map(Permission::GroupMember));

    let user = AuthGuard::new(&state.db, &session)
        .require(&permissions)
        .await?;

    let params = CreateCalendarEventsParams::from_dto(user.id, payload)?;

    let service = CalendarEventService::new(&state.db);
    let created = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Update an event.
///
/// Only provided fields change. Updating a series root does not regenerate its
/// instances.
///
/// # Access Control
/// - `Teacher` - Teachers and admins
/// - `EventCreator` - Only the user who created the event
///
/// # Returns
/// - `200 OK` - Updated event
/// - `400 Bad Request` - Invalid date-time, or start not before end
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User did not create the event
/// - `404 Not Found` - Event or new group not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/calendar/{event_id}",
    tag = CALENDAR_TAG,
    params(
        ("event_id" = i32, Path, description = "Calendar event ID")
    ),
    request_body = UpdateCalendarEventDto,
    responses(
        (status = 200, description = "Successfully updated event", body = CalendarEventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User did not create this event", body = ErrorDto),
        (status = 404, description = "Event or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateCalendarEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::EventCreator(event_id)])
        .await?;

    let params = UpdateCalendarEventParams::from_dto(event_id, payload)?;

    let service = CalendarEventService::new(&state.db);
    let event = service.update(params).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event or its whole series.
///
/// With `delete_series=true`, targeting a series root or any of its instances removes
/// the root and every instance. The flag is read from the query string; a JSON body
/// `{"delete_series": true}` is accepted too, so clients that send it in the body still
/// get series deletes.
///
/// # Access Control
/// - `Teacher` - Teachers and admins
/// - `EventCreator` - Only the user who created the event
///
/// # Returns
/// - `200 OK` - Number of events removed
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User did not create the event
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/calendar/{event_id}",
    tag = CALENDAR_TAG,
    params(
        ("event_id" = i32, Path, description = "Calendar event ID"),
        ("delete_series" = Option<bool>, Query, description = "Delete the whole recurring series (default: false)")
    ),
    request_body(content = DeleteCalendarEventDto, description = "Optional body carrying the same flag"),
    responses(
        (status = 200, description = "Successfully deleted events", body = DeletedCalendarEventsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User did not create this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Query(query): Query<DeleteCalendarEventQuery>,
    body: Option<Json<DeleteCalendarEventDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Teacher, Permission::EventCreator(event_id)])
        .await?;

    let delete_series = query.delete_series_with(body.as_ref().map(|Json(body)| body));

    let service = CalendarEventService::new(&state.db);
    let deleted = service.delete(event_id, delete_series).await?;

    Ok((StatusCode::OK, Json(DeletedCalendarEventsDto { deleted })))
}

/// Import an iCalendar file into a group.
///
/// Every `VEVENT` becomes a standalone event owned by the importing admin. The import
/// is all-or-nothing.
///
/// # Access Control
/// - `Admin` - Only admins can import calendars
///
/// # Returns
/// - `201 Created` - Number of events imported
/// - `400 Bad Request` - The file could not be parsed
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Group not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/calendar/import",
    tag = CALENDAR_TAG,
    params(
        ("group_id" = i32, Query, description = "Group receiving the imported events")
    ),
    request_body(content = String, content_type = "text/calendar"),
    responses(
        (status = 201, description = "Successfully imported events", body = ImportedCalendarEventsDto),
        (status = 400, description = "Invalid iCalendar file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_events(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ImportCalendarQuery>,
    content: String,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CalendarEventService::new(&state.db);
    let imported = service
        .import_ics(ImportCalendarParams {
            group_id: query.group_id,
            created_by: admin.id,
            content,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ImportedCalendarEventsDto { imported }),
    ))
}
