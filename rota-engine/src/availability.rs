//! Slot availability computation
//!
//! Answers "who can cover this slot": on-shift for the window, not
//! already working an overlapping block, in the right area.

use crate::time::{intervals_overlap, parse_range, parse_time_to_minutes};
use shared::models::{Area, DaySchedule, Employee};
use std::collections::HashSet;

/// Parameters for an availability lookup
#[derive(Debug, Clone, Default)]
pub struct AvailabilityQuery<'a> {
    /// Slot window, minutes since midnight
    pub block_start: u32,
    pub block_end: u32,
    /// Position currently being edited; its own assignment does not
    /// count against the employee, so reassignment among overlapping
    /// slots stays possible.
    pub editing_position_id: Option<&'a str>,
    /// Required staffing area (derived from the position's category)
    pub required_area: Option<Area>,
    /// Case-insensitive substring filter on the employee name
    pub name_filter: Option<&'a str>,
}

/// Employees eligible for the queried slot, alphabetically sorted.
///
/// Two different interval rules are applied on purpose:
/// - the already-assigned check uses the strict block overlap of
///   [`intervals_overlap`];
/// - the employee's own window uses the half-open test
///   `emp_start <= block_end && emp_end > block_start`, so an employee
///   ending exactly at the block start is unavailable while one
///   spanning adjacent blocks is not falsely excluded.
pub fn available_employees(
    day: Option<&DaySchedule>,
    roster: &[Employee],
    query: &AvailabilityQuery<'_>,
) -> Vec<Employee> {
    // 1. ids already committed to an overlapping slot today
    let mut busy: HashSet<&str> = HashSet::new();
    if let Some(day) = day {
        for block in &day.time_blocks {
            let start = parse_time_to_minutes(&block.start);
            let end = parse_time_to_minutes(&block.end);
            if !intervals_overlap(start, end, query.block_start, query.block_end) {
                continue;
            }
            for position in &block.positions {
                if query.editing_position_id == Some(position.id.as_str()) {
                    continue;
                }
                if let Some(id) = position.employee_id() {
                    busy.insert(id);
                }
            }
        }
    }

    let name_filter = query
        .name_filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let mut available: Vec<Employee> = roster
        .iter()
        .filter(|employee| {
            // 2. the employee's own window must cover the slot
            let window_ok = employee.shift_ranges().any(|range| {
                parse_range(range).is_some_and(|(emp_start, emp_end)| {
                    emp_start <= query.block_end && emp_end > query.block_start
                })
            });
            if !window_ok {
                return false;
            }
            // 3. not already assigned to an overlapping slot
            if busy.contains(employee.id.as_str()) {
                return false;
            }
            // 4. area requirement
            if let Some(required) = query.required_area
                && employee.area != Some(required)
            {
                return false;
            }
            // 5. free-text name filter
            if let Some(filter) = &name_filter
                && !employee.name.to_lowercase().contains(filter)
            {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    // 6. stable alphabetical presentation
    available.sort_by_key(|e| e.name.to_lowercase());
    available
}
