//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of pure logic such as recurrence expansion.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let root = fixture::calendar_event::entity_builder()
//!     .recurrence("weekly", end)
//!     .build();
//! ```

pub mod calendar_event;
