use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User,
    m20250901_000002_create_school_group_table::SchoolGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CalendarEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEvent::Id))
                    .col(string_len(CalendarEvent::Title, 200))
                    .col(text_null(CalendarEvent::Description))
                    .col(timestamp_with_time_zone(CalendarEvent::StartTime))
                    .col(timestamp_with_time_zone(CalendarEvent::EndTime))
                    .col(string_len_null(CalendarEvent::Location, 200))
                    .col(integer(CalendarEvent::GroupId))
                    .col(integer_null(CalendarEvent::CreatedBy))
                    .col(boolean(CalendarEvent::IsRecurring).default(false))
                    .col(string_len_null(CalendarEvent::RecurrenceType, 20))
                    .col(timestamp_with_time_zone_null(CalendarEvent::RecurrenceEnd))
                    .col(integer_null(CalendarEvent::ParentEventId))
                    .col(
                        timestamp_with_time_zone(CalendarEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_group_id")
                            .from(CalendarEvent::Table, CalendarEvent::GroupId)
                            .to(SchoolGroup::Table, SchoolGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_created_by")
                            .from(CalendarEvent::Table, CalendarEvent::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_parent_event_id")
                            .from(CalendarEvent::Table, CalendarEvent::ParentEventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_calendar_event_parent_event_id")
                    .table(CalendarEvent::Table)
                    .col(CalendarEvent::ParentEventId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CalendarEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CalendarEvent {
    Table,
    Id,
    Title,
    Description,
    StartTime,
    EndTime,
    Location,
    GroupId,
    CreatedBy,
    IsRecurring,
    RecurrenceType,
    RecurrenceEnd,
    ParentEventId,
    CreatedAt,
}
