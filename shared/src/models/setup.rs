//! Setup Model - the authoritative schedule document
//!
//! One `Setup` holds a full week: the time-blocked position grid per day,
//! the legacy employee list and the uploaded roster. The document store
//! keeps these as JavaScript-shaped JSON, hence the camelCase renames.

use super::employee::Employee;
use super::time_block::DaySchedule;
use crate::util::{DAY_NAMES, day_name_for_weekday};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full schedule document for one week
///
/// The Setup owns all time block and position data. Employee directory
/// views are recomputed from it and are never a source of truth for
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Week anchor dates, "YYYY-MM-DD"
    pub start_date: String,
    pub end_date: String,
    /// Keyed by canonical lowercase day name
    #[serde(default)]
    pub week_schedule: HashMap<String, DaySchedule>,
    /// Legacy employee list, used when no roster upload exists
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Uploaded roster; when non-empty this supersedes `employees`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_schedules: Option<Vec<Employee>>,
}

impl Setup {
    pub fn new(id: impl Into<String>, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            start_date: start_date.into(),
            end_date: end_date.into(),
            week_schedule: HashMap::new(),
            employees: Vec::new(),
            uploaded_schedules: None,
        }
    }

    pub fn day_schedule(&self, day: &str) -> Option<&DaySchedule> {
        self.week_schedule.get(day)
    }

    pub fn day_schedule_mut(&mut self, day: &str) -> Option<&mut DaySchedule> {
        self.week_schedule.get_mut(day)
    }

    /// Day entry, created on first use (canonical day names only)
    pub fn day_schedule_entry(&mut self, day: &str) -> &mut DaySchedule {
        self.week_schedule
            .entry(day.to_string())
            .or_insert_with(|| DaySchedule::new(day))
    }

    /// Whether the uploaded roster is the active employee source
    pub fn has_uploaded_roster(&self) -> bool {
        self.uploaded_schedules
            .as_ref()
            .is_some_and(|u| !u.is_empty())
    }

    /// Calendar date a canonical day name falls on within this week,
    /// anchored on `start_date`. None when the anchor is unparseable or
    /// the name is not canonical.
    pub fn date_for_day(&self, day: &str) -> Option<NaiveDate> {
        if !DAY_NAMES.contains(&day) {
            return None;
        }
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        (0..7)
            .map(|offset| start + Duration::days(offset))
            .find(|date| day_name_for_weekday(date.weekday()) == day)
    }

    /// The PUT body shape the store expects
    pub fn as_update(&self) -> SetupUpdate {
        SetupUpdate {
            name: self.name.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            week_schedule: self.week_schedule.clone(),
            uploaded_schedules: self.uploaded_schedules.clone(),
            employees: self.employees.clone(),
        }
    }
}

/// Replace-schedule payload (`PUT /schedules/{id}` body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub week_schedule: HashMap<String, DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_schedules: Option<Vec<Employee>>,
    pub employees: Vec<Employee>,
}
