//! Schedule mutation actions
//!
//! One module per user-invokable mutation. Every action mutates the
//! in-memory [`Setup`] synchronously and returns an [`Applied`] whose
//! [`Revert`] captures exactly the fields it touched, so a failed
//! persistence round can roll back that mutation without clobbering
//! other optimistic edits.
//!
//! Stale references (a time block or position deleted by a concurrent
//! server-side edit) make an action a logged no-op (`None`), not an
//! error. Invalid payloads are rejected before any state is touched.
//!
//! All actions are scoped to the active day except [`delete_employee`],
//! which is explicitly week-wide.

mod add_employee;
mod add_position;
mod assign;
mod delete_employee;
mod remove;
mod rename;

pub use add_employee::{AddEmployeeRequest, add_employee};
pub use add_position::{AddPositionRequest, add_position};
pub use assign::assign;
pub use delete_employee::delete_employee;
pub use remove::remove;
pub use rename::rename_employee;

use shared::error::{AppError, AppResult};
use shared::models::{Employee, Setup};
use validator::Validate;

/// Receipt for an applied mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// Field-level rollback for this mutation
    pub revert: Revert,
}

impl Applied {
    fn new(revert: Revert) -> Self {
        Self { revert }
    }
}

/// Inverse of a single mutation, restricted to the fields it wrote
#[derive(Debug, Clone, PartialEq)]
pub enum Revert {
    /// Restore a position's prior employee binding
    Assignment {
        day: String,
        position_id: String,
        /// Prior `(id, name)` pair; None restores "unassigned"
        prior: Option<(String, String)>,
    },
    /// Restore a roster entry's prior display name
    RosterName {
        uploaded: bool,
        employee_id: String,
        prior: String,
    },
    /// Re-insert a roster entry removed by a delete
    RosterEntry {
        uploaded: bool,
        index: usize,
        employee: Employee,
    },
    /// Drop a roster entry added by this mutation
    RosterAdded { employee_id: String },
    /// Drop a position added by this mutation
    PositionAdded {
        day: String,
        time_block_id: String,
        position_id: String,
        /// The block itself was created for this position
        created_block: bool,
    },
    /// Compound rollback; entries are undone in reverse order
    Many(Vec<Revert>),
}

/// Apply a captured [`Revert`] back onto the setup.
///
/// Targets that disappeared since the mutation are skipped silently,
/// same tolerance as the forward path.
pub fn revert(setup: &mut Setup, revert: Revert) {
    match revert {
        Revert::Assignment {
            day,
            position_id,
            prior,
        } => {
            if let Some(day) = setup.day_schedule_mut(&day)
                && let Some(position) = day.find_position_mut(&position_id)
            {
                match prior {
                    Some((id, name)) => {
                        position.assign(id, name);
                    }
                    None => {
                        position.clear_assignment();
                    }
                }
            }
        }
        Revert::RosterName {
            uploaded,
            employee_id,
            prior,
        } => {
            if let Some(entry) = roster_list_mut(setup, uploaded)
                .iter_mut()
                .find(|e| e.id == employee_id)
            {
                entry.name = prior;
            }
        }
        Revert::RosterEntry {
            uploaded,
            index,
            employee,
        } => {
            let list = roster_list_mut(setup, uploaded);
            let index = index.min(list.len());
            list.insert(index, employee);
        }
        Revert::RosterAdded { employee_id } => {
            if let Some(uploaded) = setup.uploaded_schedules.as_mut() {
                uploaded.retain(|e| e.id != employee_id);
            }
            setup.employees.retain(|e| e.id != employee_id);
        }
        Revert::PositionAdded {
            day,
            time_block_id,
            position_id,
            created_block,
        } => {
            if let Some(day) = setup.day_schedule_mut(&day) {
                if created_block {
                    day.time_blocks.retain(|b| b.id != time_block_id);
                } else if let Some(block) = day.time_block_mut(&time_block_id) {
                    block.positions.retain(|p| p.id != position_id);
                }
            }
        }
        Revert::Many(entries) => {
            for entry in entries.into_iter().rev() {
                self::revert(setup, entry);
            }
        }
    }
}

/// The roster list a revert entry refers to
fn roster_list_mut(setup: &mut Setup, uploaded: bool) -> &mut Vec<Employee> {
    if uploaded {
        setup.uploaded_schedules.get_or_insert_with(Vec::new)
    } else {
        &mut setup.employees
    }
}

/// Reject an invalid payload before any mutation or network call
pub(crate) fn validate_request(request: &impl Validate) -> AppResult<()> {
    request
        .validate()
        .map_err(|errors| AppError::validation(errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Position, TimeBlock};

    fn setup_with_position() -> Setup {
        let mut setup = Setup::new("s1", "2026-08-03", "2026-08-09");
        let day = setup.day_schedule_entry("monday");
        let mut block = TimeBlock::new("b1", "08:00", "12:00");
        block
            .positions
            .push(Position::new("p1", "Register 1", "Front Counter"));
        day.time_blocks.push(block);
        setup
    }

    #[test]
    fn test_revert_assignment_restores_prior_binding() {
        let mut setup = setup_with_position();
        setup
            .day_schedule_mut("monday")
            .unwrap()
            .find_position_mut("p1")
            .unwrap()
            .assign("e2", "Bob");

        revert(
            &mut setup,
            Revert::Assignment {
                day: "monday".to_string(),
                position_id: "p1".to_string(),
                prior: Some(("e1".to_string(), "Ann".to_string())),
            },
        );
        let day = setup.day_schedule("monday").unwrap();
        let (_, position) = day.find_position("p1").unwrap();
        assert_eq!(position.assignment(), Some(("e1", "Ann")));
    }

    #[test]
    fn test_revert_skips_missing_targets() {
        let mut setup = setup_with_position();
        // Position vanished server-side; the revert is a silent no-op
        revert(
            &mut setup,
            Revert::Assignment {
                day: "monday".to_string(),
                position_id: "gone".to_string(),
                prior: None,
            },
        );
        assert_eq!(setup.day_schedule("monday").unwrap().time_blocks.len(), 1);
    }

    #[test]
    fn test_revert_roster_entry_clamps_index() {
        let mut setup = setup_with_position();
        revert(
            &mut setup,
            Revert::RosterEntry {
                uploaded: false,
                index: 42,
                employee: Employee::new("e1", "Ann"),
            },
        );
        assert_eq!(setup.employees.len(), 1);
        assert_eq!(setup.employees[0].id, "e1");
    }

    #[test]
    fn test_revert_many_undoes_in_reverse_order() {
        let mut setup = setup_with_position();
        setup.employees.push(Employee::new("e1", "Renamed Twice"));

        revert(
            &mut setup,
            Revert::Many(vec![
                Revert::RosterName {
                    uploaded: false,
                    employee_id: "e1".to_string(),
                    prior: "Original".to_string(),
                },
                Revert::RosterName {
                    uploaded: false,
                    employee_id: "e1".to_string(),
                    prior: "Intermediate".to_string(),
                },
            ]),
        );
        // The later entry is undone first, so the earliest prior wins
        assert_eq!(setup.employees[0].name, "Original");
    }
}
