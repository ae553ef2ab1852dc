//! Delete-employee action
//!
//! The one mutation that is NOT scoped to the active day: deleting an
//! employee unbinds them from positions across the whole week and drops
//! them from both roster lists.

use super::{Applied, Revert};
use shared::models::Setup;

/// Remove every trace of `employee_id` from the schedule.
///
/// Cascades to every day's positions, then to the uploaded roster and
/// the legacy employee list. Returns `None` when the id appears nowhere.
pub fn delete_employee(setup: &mut Setup, employee_id: &str) -> Option<Applied> {
    let mut reverts = Vec::new();

    // 1. Unbind positions across ALL days, not just the active one
    for (day_name, day) in setup.week_schedule.iter_mut() {
        for block in &mut day.time_blocks {
            for position in &mut block.positions {
                if position.employee_id() == Some(employee_id)
                    && let Some(prior) = position.clear_assignment()
                {
                    reverts.push(Revert::Assignment {
                        day: day_name.clone(),
                        position_id: position.id.clone(),
                        prior: Some(prior),
                    });
                }
            }
        }
    }

    // 2. Drop roster entries from both sources
    if let Some(uploaded) = setup.uploaded_schedules.as_mut() {
        while let Some(index) = uploaded.iter().position(|e| e.id == employee_id) {
            reverts.push(Revert::RosterEntry {
                uploaded: true,
                index,
                employee: uploaded.remove(index),
            });
        }
    }
    while let Some(index) = setup.employees.iter().position(|e| e.id == employee_id) {
        reverts.push(Revert::RosterEntry {
            uploaded: false,
            index,
            employee: setup.employees.remove(index),
        });
    }

    if reverts.is_empty() {
        tracing::debug!(employee_id, "delete: employee not found, skipping");
        return None;
    }

    tracing::info!(employee_id, touched = reverts.len(), "deleted employee everywhere");
    Some(Applied::new(Revert::Many(reverts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{assign, revert};
    use shared::models::{Employee, Position, TimeBlock};

    fn test_setup() -> Setup {
        let mut setup = Setup::new("s1", "2026-08-03", "2026-08-09");
        let mut ann = Employee::new("e1", "Ann");
        ann.day = Some("monday".to_string());
        setup.uploaded_schedules = Some(vec![ann]);
        setup.employees.push(Employee::new("e1", "Ann"));

        for (day, position_id) in [("monday", "p1"), ("wednesday", "p2")] {
            let day = setup.day_schedule_entry(day);
            let mut block = TimeBlock::new(format!("b-{}", position_id), "08:00", "12:00");
            block
                .positions
                .push(Position::new(position_id, "Register", "Front Counter"));
            day.time_blocks.push(block);
        }
        setup
    }

    #[test]
    fn test_delete_cascades_across_all_days() {
        let mut setup = test_setup();
        assign(&mut setup, "monday", "p1", "e1", "Ann").unwrap();
        assign(&mut setup, "wednesday", "p2", "e1", "Ann").unwrap();

        delete_employee(&mut setup, "e1").unwrap();

        for (day, position_id) in [("monday", "p1"), ("wednesday", "p2")] {
            let day = setup.day_schedule(day).unwrap();
            assert_eq!(day.find_position(position_id).unwrap().1.assignment(), None);
        }
        assert!(setup.uploaded_schedules.as_ref().unwrap().is_empty());
        assert!(setup.employees.is_empty());
    }

    #[test]
    fn test_delete_revert_restores_everything() {
        let mut setup = test_setup();
        assign(&mut setup, "monday", "p1", "e1", "Ann").unwrap();
        assign(&mut setup, "wednesday", "p2", "e1", "Ann").unwrap();
        let applied = delete_employee(&mut setup, "e1").unwrap();

        revert(&mut setup, applied.revert);

        let monday = setup.day_schedule("monday").unwrap();
        assert_eq!(
            monday.find_position("p1").unwrap().1.assignment(),
            Some(("e1", "Ann"))
        );
        let wednesday = setup.day_schedule("wednesday").unwrap();
        assert_eq!(
            wednesday.find_position("p2").unwrap().1.assignment(),
            Some(("e1", "Ann"))
        );
        assert_eq!(setup.uploaded_schedules.as_ref().unwrap().len(), 1);
        assert_eq!(setup.employees.len(), 1);
    }

    #[test]
    fn test_delete_unknown_employee_is_noop() {
        let mut setup = test_setup();
        assert!(delete_employee(&mut setup, "e9").is_none());
    }

    #[test]
    fn test_delete_roster_only_employee_still_applies() {
        let mut setup = test_setup();
        // No assignments at all; deletion still drops the roster rows
        delete_employee(&mut setup, "e1").unwrap();
        assert!(setup.uploaded_schedules.as_ref().unwrap().is_empty());
        assert!(setup.employees.is_empty());
    }
}
