//! Server-side domain models.
//!
//! Repositories convert entity models into these types, services operate on them, and
//! controllers convert them into DTOs.

pub mod calendar;
pub mod group;
pub mod user;
