//! Position Model (岗位)

use super::employee::Area;
use serde::{Deserialize, Serialize};

/// Placeholder name used by uploads when an assignee could not be resolved
pub const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";

/// A single staffing slot within a time block, optionally bound to one
/// employee.
///
/// `employee_id` is authoritative; `employee_name` is a denormalized
/// display cache. The two are private and only ever written together
/// through [`Position::assign`] / [`Position::clear_assignment`], so they
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub name: String,
    /// Labor category (e.g. "Front Counter", "Drive Thru", "Kitchen")
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_name: Option<String>,
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            employee_id: None,
            employee_name: None,
        }
    }

    /// Section this position belongs to, derived from its category:
    /// Kitchen/BOH categories are Back-of-House, everything else is
    /// Front-of-House.
    pub fn section(&self) -> Area {
        let category = self.category.to_lowercase();
        if category.contains("kitchen") || category.contains("boh") {
            Area::Boh
        } else {
            Area::Foh
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    /// The bound employee as `(id, display name)`, if any
    pub fn assignment(&self) -> Option<(&str, &str)> {
        match (&self.employee_id, &self.employee_name) {
            (Some(id), Some(name)) => Some((id.as_str(), name.as_str())),
            // A record missing its name cache still resolves by id;
            // the position name stands in for display.
            (Some(id), None) => Some((id.as_str(), self.name.as_str())),
            _ => None,
        }
    }

    /// Bind an employee to this position, returning the prior binding.
    ///
    /// Sets both id and name in one step. A placeholder or empty name
    /// falls back to the position's own name for display.
    pub fn assign(
        &mut self,
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
    ) -> Option<(String, String)> {
        let name = employee_name.into();
        let name = if is_placeholder_name(&name) {
            self.name.clone()
        } else {
            name
        };
        let prior = self.take_assignment();
        self.employee_id = Some(employee_id.into());
        self.employee_name = Some(name);
        prior
    }

    /// Clear the binding, returning the prior `(id, name)` pair.
    ///
    /// Id and name are always cleared together.
    pub fn clear_assignment(&mut self) -> Option<(String, String)> {
        self.take_assignment()
    }

    fn take_assignment(&mut self) -> Option<(String, String)> {
        let id = self.employee_id.take()?;
        let name = self.employee_name.take().unwrap_or_else(|| self.name.clone());
        Some((id, name))
    }
}

/// Whether a supplied employee name is unusable for display
pub fn is_placeholder_name(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || name.eq_ignore_ascii_case(UNKNOWN_EMPLOYEE)
}
