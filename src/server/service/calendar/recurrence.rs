//! Recurring event expansion and series deletion scope.
//!
//! Both functions are pure. Persisting the generated instances and removing the resolved
//! rows is left to [`super::CalendarEventService`], which runs them inside a transaction.

use crate::server::model::calendar::{CalendarEvent, EventInstance};

/// Upper bound on generated instances for a single series root.
pub const MAX_RECURRING_INSTANCES: usize = 52;

/// Generates the instances following a series root.
///
/// Starting from the root's start time, the recurrence step is added repeatedly and an
/// instance is emitted for every resulting start that does not pass `recurrence_end`. An
/// occurrence falling exactly on `recurrence_end` is included. Each instance keeps the
/// root's duration and copies its title, description, location, group and creator. The
/// root itself is never part of the result.
///
/// # Arguments
/// - `root` - Series root; its `id` becomes the parent of every instance
///
/// # Returns
/// - `Vec<EventInstance>` - At most [`MAX_RECURRING_INSTANCES`] instances in start order;
///   empty when the recurrence kind is missing or unknown, or no end is set
pub fn expand(root: &CalendarEvent) -> Vec<EventInstance> {
    let (Some(kind), Some(recurrence_end)) = (root.recurrence_kind(), root.recurrence_end) else {
        return Vec::new();
    };

    let duration = root.duration();
    let step = kind.step();
    let mut instances = Vec::new();
    let mut current = root.start_time;

    while instances.len() < MAX_RECURRING_INSTANCES {
        current = match current.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
        if current > recurrence_end {
            break;
        }
        let Some(end_time) = current.checked_add_signed(duration) else {
            break;
        };

        instances.push(EventInstance {
            title: root.title.clone(),
            description: root.description.clone(),
            start_time: current,
            end_time,
            location: root.location.clone(),
            group_id: root.group_id,
            created_by: root.created_by,
            parent_event_id: root.id,
        });
    }

    instances
}

/// Rows affected by deleting an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionScope {
    /// Only the targeted event.
    Single(i32),
    /// The series root and every instance pointing at it.
    Series { root_id: i32 },
}

/// Decides which rows a delete request covers.
///
/// A series delete on a root or on any of its instances resolves to the same root, so the
/// resulting set does not depend on which member of the series was targeted. Standalone
/// events and plain deletes only ever cover the target.
pub fn deletion_scope(target: &CalendarEvent, delete_series: bool) -> DeletionScope {
    if !delete_series {
        return DeletionScope::Single(target.id);
    }

    if target.is_recurring {
        return DeletionScope::Series { root_id: target.id };
    }

    match target.parent_event_id {
        Some(root_id) => DeletionScope::Series { root_id },
        None => DeletionScope::Single(target.id),
    }
}
