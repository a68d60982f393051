use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        calendar::{
            CalendarEventDto, CalendarEventListDto, CreateCalendarEventDto,
            CreatedCalendarEventsDto, DeleteCalendarEventDto, DeletedCalendarEventsDto,
            ImportedCalendarEventsDto,
            UpdateCalendarEventDto,
        },
        user::UserDto,
    },
    server::{
        controller::{
            auth::{self, get_user, logout},
            calendar::{self, create_event, delete_event, get_events, import_events, update_event},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::get_user,
        auth::logout,
        calendar::get_events,
        calendar::create_event,
        calendar::update_event,
        calendar::delete_event,
        calendar::import_events,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CalendarEventDto,
        CalendarEventListDto,
        CreateCalendarEventDto,
        CreatedCalendarEventsDto,
        UpdateCalendarEventDto,
        DeleteCalendarEventDto,
        DeletedCalendarEventsDto,
        ImportedCalendarEventsDto,
    )),
    tags(
        (name = "auth", description = "Session user"),
        (name = "calendar", description = "Calendar events and recurring series")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/calendar", get(get_events).post(create_event))
        .route("/api/calendar/import", post(import_events))
        .route(
            "/api/calendar/{event_id}",
            put(update_event).delete(delete_event),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
