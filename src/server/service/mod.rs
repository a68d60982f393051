//! Service layer for business logic and orchestration.
//!
//! Sits between the controller (API) layer and the data (repository) layer. Services
//! implement business rules and validation, work with domain models rather than DTOs or
//! entity models, and own transaction boundaries for multi-step writes.

pub mod calendar;

#[cfg(test)]
mod test;
