//! SeaORM entity definitions for the OpenDirecte database schema.

pub mod prelude;

pub mod calendar_event;
pub mod school_group;
pub mod user;
pub mod user_group;
