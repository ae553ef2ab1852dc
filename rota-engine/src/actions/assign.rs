//! Assign action
//!
//! Binds an employee to a position in the active day. Assigning over an
//! existing binding replaces it in place; there is no unassigned
//! intermediate state.

use super::{Applied, Revert};
use shared::models::Setup;

/// Bind `employee_id`/`employee_name` to the position.
///
/// The id and the denormalized display name are written together; a
/// placeholder name ("Unknown Employee", blank) falls back to the
/// position's own name. Returns `None` when the day or position cannot
/// be found (stale reference after a concurrent edit) - a logged no-op.
pub fn assign(
    setup: &mut Setup,
    active_day: &str,
    position_id: &str,
    employee_id: &str,
    employee_name: &str,
) -> Option<Applied> {
    // 1. Locate the position within the active day
    let Some(day) = setup.day_schedule_mut(active_day) else {
        tracing::debug!(day = active_day, "assign: day not in week schedule, skipping");
        return None;
    };
    let Some(position) = day.find_position_mut(position_id) else {
        tracing::debug!(position_id, "assign: position not found, skipping");
        return None;
    };

    // 2. Paired id + name write
    let prior = position.assign(employee_id, employee_name);

    tracing::info!(position_id, employee_id, day = active_day, "assigned employee to position");
    Some(Applied::new(Revert::Assignment {
        day: active_day.to_string(),
        position_id: position_id.to_string(),
        prior,
    }))
}
