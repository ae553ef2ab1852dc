//! Break Model (休息管理)

use serde::{Deserialize, Serialize};

/// Break status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "completed")]
    Completed,
}

/// Break record - one break taken (or in progress) by an employee
///
/// At most one `Active` record may exist per employee at any instant;
/// the break tracker enforces this before appending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRecord {
    /// Break start (Unix millis)
    pub start_time: i64,
    /// Break end (Unix millis), None while still active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Planned duration in minutes
    pub duration: i64,
    /// Break status
    pub status: BreakStatus,
}

impl BreakRecord {
    /// Start a new active break at `start_time`
    pub fn start(start_time: i64, duration: i64) -> Self {
        Self {
            start_time,
            end_time: None,
            duration,
            status: BreakStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BreakStatus::Active
    }

    /// The instant (Unix millis) at which the planned duration elapses
    pub fn scheduled_end(&self) -> i64 {
        self.start_time + self.duration * 60_000
    }

    /// Whether the planned duration has elapsed at `now`
    pub fn is_elapsed(&self, now: i64) -> bool {
        now >= self.scheduled_end()
    }

    /// Minutes left before the planned duration elapses, floored at 0
    pub fn remaining_minutes(&self, now: i64) -> i64 {
        (self.duration - (now - self.start_time) / 60_000).max(0)
    }
}
