//! Domain model for school groups (classes and clubs).

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolGroup {
    pub id: i32,
    pub name: String,
    /// Either `class` or `club`.
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl SchoolGroup {
    pub fn from_entity(entity: entity::school_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind,
            created_at: entity.created_at,
        }
    }
}
