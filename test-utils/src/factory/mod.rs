//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let group = factory::school_group::create_group(&db).await?;
//!
//!     // Create a teacher, a group they belong to, and an event they own
//!     let (teacher, group, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("principal")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `school_group` - Create group entities and memberships
//! - `calendar_event` - Create standalone events, series roots and instances
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod calendar_event;
pub mod helpers;
pub mod school_group;
pub mod user;

pub use calendar_event::create_event;
pub use school_group::{add_member, create_group};
pub use user::create_user;
