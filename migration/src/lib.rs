pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_school_group_table;
mod m20250901_000003_create_user_group_table;
mod m20250902_000004_create_calendar_event_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_school_group_table::Migration),
            Box::new(m20250901_000003_create_user_group_table::Migration),
            Box::new(m20250902_000004_create_calendar_event_table::Migration),
        ]
    }
}
