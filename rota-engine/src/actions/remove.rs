//! Remove action
//!
//! Clears a position's employee binding in the active day.

use super::{Applied, Revert};
use shared::models::Setup;

/// Unbind whatever employee holds the position.
///
/// Id and name are cleared together. Removing an already-empty position
/// still succeeds (idempotent). Returns `None` for stale references.
pub fn remove(setup: &mut Setup, active_day: &str, position_id: &str) -> Option<Applied> {
    // 1. Locate the position within the active day
    let Some(day) = setup.day_schedule_mut(active_day) else {
        tracing::debug!(day = active_day, "remove: day not in week schedule, skipping");
        return None;
    };
    let Some(position) = day.find_position_mut(position_id) else {
        tracing::debug!(position_id, "remove: position not found, skipping");
        return None;
    };

    // 2. Paired clear
    let prior = position.clear_assignment();

    tracing::info!(position_id, day = active_day, "removed employee from position");
    Some(Applied::new(Revert::Assignment {
        day: active_day.to_string(),
        position_id: position_id.to_string(),
        prior,
    }))
}
