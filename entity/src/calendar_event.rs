use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "calendar_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub location: Option<String>,
    pub group_id: i32,
    pub created_by: Option<i32>,
    pub is_recurring: bool,
    /// One of `weekly`, `biweekly` or `monthly` for series roots.
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<DateTimeUtc>,
    /// Set on generated instances, pointing at the series root.
    pub parent_event_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_group::Entity",
        from = "Column::GroupId",
        to = "super::school_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SchoolGroup,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentEventId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ParentEvent,
}

impl Related<super::school_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolGroup.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
