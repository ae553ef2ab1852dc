//! Employee directory resolution
//!
//! Produces the definitive list of employees "in play" for a day by
//! merging the uploaded roster, the legacy employee list, and employees
//! embedded in position assignments. The directory is a recomputed view
//! over the Setup; it is never the source of truth for assignment.

use crate::time::{current_minute, normalize_day_name, parse_range, today_day_name};
use shared::models::{DaySchedule, Employee, Setup};
use std::collections::{HashMap, HashSet};

/// Employees scheduled for `active_day`, duplicate-free by id.
///
/// Source precedence:
/// 1. the uploaded roster, taken as-is when non-empty;
/// 2. else the legacy `employees` list;
/// 3. plus employees reconstructed from assigned positions in the day's
///    time blocks that neither list mentions (positions assigned
///    directly, without a roster entry).
///
/// First source wins for conflicting fields. Roster entries are kept
/// when their day normalizes to `active_day` or is unset ("every day").
/// Assigned-block ranges are aggregated onto whichever record holds the
/// employee, so multi-position employees carry every range they work.
pub fn scheduled_employees(setup: &Setup, active_day: &str) -> Vec<Employee> {
    let target = normalize_day_name(active_day);

    // 1.-2. pick the roster source and day-filter it
    let source: &[Employee] = if setup.has_uploaded_roster() {
        setup.uploaded_schedules.as_deref().unwrap_or(&[])
    } else {
        &setup.employees
    };

    let mut result: Vec<Employee> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();
    for employee in source {
        let day_matches = match employee.day.as_deref() {
            None => true,
            Some(day) => target.is_some() && normalize_day_name(day) == target,
        };
        if !day_matches || index_by_id.contains_key(&employee.id) {
            continue;
        }
        index_by_id.insert(employee.id.clone(), result.len());
        result.push(employee.clone());
    }

    // 3. reconstruct employees that only exist as position assignments
    if let Some(day) = setup.day_schedule(active_day) {
        for block in &day.time_blocks {
            let range = block.range_label();
            for position in &block.positions {
                let Some((id, name)) = position.assignment() else {
                    continue;
                };
                match index_by_id.get(id).copied() {
                    Some(index) => result[index].add_time_block(range.clone()),
                    None => {
                        let mut employee = Employee::new(id, name);
                        employee.area = Some(position.section());
                        employee.day = Some(active_day.to_string());
                        employee.time_block = Some(range.clone());
                        index_by_id.insert(employee.id.clone(), result.len());
                        result.push(employee);
                    }
                }
            }
        }
    }

    result
}

/// Scheduled employees whose id is not bound to any position in the
/// active day. Sorted alphabetically by name (case-insensitive); the
/// ordering is part of the contract, the presentation layer relies on
/// it being stable.
pub fn unassigned_employees(
    scheduled: &[Employee],
    active_day: &str,
    week_schedule: &HashMap<String, DaySchedule>,
) -> Vec<Employee> {
    let assigned: HashSet<&str> = week_schedule
        .get(active_day)
        .map(|day| day.assigned_employee_ids().collect())
        .unwrap_or_default();

    let mut unassigned: Vec<Employee> = scheduled
        .iter()
        .filter(|e| !assigned.contains(e.id.as_str()))
        .cloned()
        .collect();
    unassigned.sort_by_key(|e| e.name.to_lowercase());
    unassigned
}

/// Whether the employee's shift covers `minute` on `day`.
///
/// Shift-presence is inclusive on both ends: an employee whose shift
/// ends at 17:00 is still on shift at exactly 17:00. This differs from
/// [`crate::time::intervals_overlap`], which is strict; the asymmetry
/// is deliberate.
pub fn is_on_shift_at(employee: &Employee, day: &str, minute: u32) -> bool {
    let day_matches = match employee.day.as_deref() {
        None => true,
        Some(raw) => {
            let target = normalize_day_name(day);
            target.is_some() && normalize_day_name(raw) == target
        }
    };
    if !day_matches {
        return false;
    }
    employee
        .shift_ranges()
        .any(|range| parse_range(range).is_some_and(|(start, end)| start <= minute && minute <= end))
}

/// Whether the employee is on shift right now (local wall clock)
pub fn is_on_current_shift(employee: &Employee) -> bool {
    is_on_shift_at(employee, today_day_name(), current_minute())
}
