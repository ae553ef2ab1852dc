//! Add-employee action
//!
//! Appends an ad-hoc employee to the roster for the active day. Touches
//! no position; the new employee shows up through the directory views.

use super::{Applied, Revert, validate_request};
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::{Area, Employee, Setup};
use shared::util::snowflake_id;
use validator::Validate;

/// Add-employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeRequest {
    #[validate(length(min = 1, message = "employee name is required"))]
    pub name: String,
    /// Staffing area, if known at entry time
    pub area: Option<Area>,
    /// Shift window, raw time strings
    #[validate(length(min = 1, message = "shift start time is required"))]
    pub start: String,
    #[validate(length(min = 1, message = "shift end time is required"))]
    pub end: String,
}

/// Synthesize a new roster entry scoped to `active_day`.
///
/// The entry lands in whichever roster source the directory reads: the
/// uploaded list when one is active, else the legacy list. Rejects an
/// incomplete payload before touching state.
pub fn add_employee(
    setup: &mut Setup,
    active_day: &str,
    request: &AddEmployeeRequest,
) -> AppResult<Applied> {
    // 1. Validate the payload
    validate_request(request)?;

    // 2. Mint the roster entry
    let employee_id = format!("emp-{}", snowflake_id());
    let mut employee = Employee::new(employee_id.clone(), request.name.trim());
    employee.area = request.area;
    employee.day = Some(active_day.to_string());
    employee.time_block = Some(format!("{} - {}", request.start.trim(), request.end.trim()));

    // 3. Append to the active roster source
    if setup.has_uploaded_roster() {
        if let Some(uploaded) = setup.uploaded_schedules.as_mut() {
            uploaded.push(employee);
        }
    } else {
        setup.employees.push(employee);
    }

    tracing::info!(employee_id, name = request.name.as_str(), day = active_day, "added employee");
    Ok(Applied::new(Revert::RosterAdded { employee_id }))
}
