use crate::server::{
    data::calendar_event::CalendarEventRepository,
    model::calendar::{CreateCalendarEventParams, EventInstance, UpdateCalendarEventParams},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_instances;
mod delete_many;
mod get_by_group_ids;
mod get_by_id;
mod update;
