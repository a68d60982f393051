//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Every repository is generic over
//! `ConnectionTrait`, so the same code runs against the pool or inside a transaction.

pub mod calendar_event;
pub mod group;
pub mod user;
