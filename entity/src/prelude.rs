pub use super::calendar_event::Entity as CalendarEvent;
pub use super::school_group::Entity as SchoolGroup;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
