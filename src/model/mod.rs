//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON request and response bodies. They are converted to and
//! from server-side domain models at the controller boundary.

pub mod api;
pub mod calendar;
pub mod user;
