//! Rename action
//!
//! Changes an employee's display name everywhere it shows in the active
//! day. A rename keeps the employee id - it is NOT a re-identification,
//! and must not be confused with delete + reassign.

use super::{Applied, Revert};
use shared::models::Setup;

/// Update the display name for `employee_id` on every bound position in
/// the active day and on the matching roster entries.
///
/// Returns `None` when the id appears nowhere (logged no-op).
pub fn rename_employee(
    setup: &mut Setup,
    active_day: &str,
    employee_id: &str,
    new_name: &str,
) -> Option<Applied> {
    let mut reverts = Vec::new();

    // 1. Update the denormalized name on bound positions (id preserved)
    if let Some(day) = setup.day_schedule_mut(active_day) {
        for block in &mut day.time_blocks {
            for position in &mut block.positions {
                if position.employee_id() == Some(employee_id)
                    && let Some(prior) = position.assign(employee_id, new_name)
                {
                    reverts.push(Revert::Assignment {
                        day: active_day.to_string(),
                        position_id: position.id.clone(),
                        prior: Some(prior),
                    });
                }
            }
        }
    }

    // 2. Update the roster entries, uploaded list first
    if let Some(uploaded) = setup.uploaded_schedules.as_mut() {
        for entry in uploaded.iter_mut().filter(|e| e.id == employee_id) {
            reverts.push(Revert::RosterName {
                uploaded: true,
                employee_id: employee_id.to_string(),
                prior: std::mem::replace(&mut entry.name, new_name.to_string()),
            });
        }
    }
    for entry in setup.employees.iter_mut().filter(|e| e.id == employee_id) {
        reverts.push(Revert::RosterName {
            uploaded: false,
            employee_id: employee_id.to_string(),
            prior: std::mem::replace(&mut entry.name, new_name.to_string()),
        });
    }

    if reverts.is_empty() {
        tracing::debug!(employee_id, "rename: employee not found, skipping");
        return None;
    }

    tracing::info!(employee_id, new_name, day = active_day, "renamed employee");
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

        for (day, block_id, position_id) in [
            ("monday", "b1", "p1"),
            ("monday", "b1", "p2"),
            ("wednesday", "b2", "p3"),
        ] {
            let day = setup.day_schedule_entry(day);
            if day.time_block(block_id).is_none() {
                day.time_blocks
                    .push(TimeBlock::new(block_id, "08:00", "12:00"));
            }
            day.time_block_mut(block_id)
                .unwrap()
                .positions
                .push(Position::new(position_id, "Register", "Front Counter"));
        }
        setup
    }

    #[test]
    fn test_rename_is_scoped_to_active_day() {
        let mut setup = test_setup();
        assign(&mut setup, "monday", "p1", "e1", "Ann").unwrap();
        assign(&mut setup, "monday", "p2", "e1", "Ann").unwrap();
        assign(&mut setup, "wednesday", "p3", "e1", "Ann").unwrap();

        rename_employee(&mut setup, "monday", "e1", "Annabel").unwrap();

        let monday = setup.day_schedule("monday").unwrap();
        assert_eq!(
            monday.find_position("p1").unwrap().1.assignment(),
            Some(("e1", "Annabel"))
        );
        assert_eq!(
            monday.find_position("p2").unwrap().1.assignment(),
            Some(("e1", "Annabel"))
        );
        // Wednesday keeps the old display name; rename is day-scoped
        let wednesday = setup.day_schedule("wednesday").unwrap();
        assert_eq!(
            wednesday.find_position("p3").unwrap().1.assignment(),
            Some(("e1", "Ann"))
        );
        // The roster entry follows the rename
        assert_eq!(setup.uploaded_schedules.as_ref().unwrap()[0].name, "Annabel");
    }

    #[test]
    fn test_rename_preserves_employee_id() {
        let mut setup = test_setup();
        assign(&mut setup, "monday", "p1", "e1", "Ann").unwrap();
        rename_employee(&mut setup, "monday", "e1", "Annabel").unwrap();

        let monday = setup.day_schedule("monday").unwrap();
        let (_, position) = monday.find_position("p1").unwrap();
        assert_eq!(position.employee_id(), Some("e1"));
    }

    #[test]
    fn test_rename_revert_restores_names() {
        let mut setup = test_setup();
        assign(&mut setup, "monday", "p1", "e1", "Ann").unwrap();
        let applied = rename_employee(&mut setup, "monday", "e1", "Annabel").unwrap();

        revert(&mut setup, applied.revert);
        let monday = setup.day_schedule("monday").unwrap();
        assert_eq!(
            monday.find_position("p1").unwrap().1.assignment(),
            Some(("e1", "Ann"))
        );
        assert_eq!(setup.uploaded_schedules.as_ref().unwrap()[0].name, "Ann");
    }

    #[test]
    fn test_rename_unknown_employee_is_noop() {
        let mut setup = test_setup();
        assert!(rename_employee(&mut setup, "monday", "e9", "Nobody").is_none());
    }
}
