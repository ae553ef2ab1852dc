//! Break Tracker (休息管理)
//!
//! Per-employee break state: at most one active break per employee, a
//! per-day history for "already had a break" checks, and remaining-time
//! computation. The tracker owns its own state keyed by employee id and
//! never touches the `Setup`; the two are correlated only by id.
//!
//! An active break transitions to completed exactly once when its
//! duration elapses: lazily on any query, or eagerly through the timer
//! armed by [`BreakTracker::arm_auto_complete`]. A manual
//! [`BreakTracker::end_break`] cancels the timer; a timer that fires
//! anyway finds no active break and does nothing.

use dashmap::DashMap;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BreakRecord, BreakStatus};
use shared::util::now_millis;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
struct EmployeeBreaks {
    name: String,
    records: Vec<BreakRecord>,
}

#[derive(Debug, Default)]
struct BreakState {
    records: DashMap<String, EmployeeBreaks>,
    timers: DashMap<String, CancellationToken>,
}

/// Tracks breaks for the day's working set of employees.
///
/// Cheap to clone; clones share state, which is how the auto-completion
/// task keeps a handle on the tracker.
#[derive(Debug, Default, Clone)]
pub struct BreakTracker {
    inner: Arc<BreakState>,
}

impl BreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a break for the employee.
    ///
    /// Rejected before any mutation when a break is already active or
    /// the duration is not positive.
    pub fn start_break(
        &self,
        employee_id: &str,
        employee_name: &str,
        duration_minutes: i64,
    ) -> AppResult<BreakRecord> {
        self.start_break_at(employee_id, employee_name, duration_minutes, now_millis())
    }

    fn start_break_at(
        &self,
        employee_id: &str,
        employee_name: &str,
        duration_minutes: i64,
        now: i64,
    ) -> AppResult<BreakRecord> {
        if duration_minutes <= 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidBreakDuration,
                format!("Break duration must be positive, got {}", duration_minutes),
            ));
        }

        let mut entry = self
            .inner
            .records
            .entry(employee_id.to_string())
            .or_insert_with(|| EmployeeBreaks {
                name: employee_name.to_string(),
                records: Vec::new(),
            });
        finish_elapsed(&mut entry.records, now);

        if entry.records.iter().any(BreakRecord::is_active) {
            return Err(AppError::new(ErrorCode::BreakAlreadyActive)
                .with_detail("employeeId", employee_id));
        }

        let record = BreakRecord::start(now, duration_minutes);
        entry.records.push(record.clone());
        tracing::info!(employee_id, employee_name, duration_minutes, "break started");
        Ok(record)
    }

    /// End the employee's active break, if any.
    ///
    /// Ending when no break is active is a no-op (`None`); that is what
    /// makes a late auto-completion timer harmless.
    pub fn end_break(&self, employee_id: &str) -> Option<BreakRecord> {
        self.end_break_at(employee_id, now_millis())
    }

    fn end_break_at(&self, employee_id: &str, now: i64) -> Option<BreakRecord> {
        if let Some((_, token)) = self.inner.timers.remove(employee_id) {
            token.cancel();
        }

        let mut entry = self.inner.records.get_mut(employee_id)?;
        let record = entry.records.iter_mut().find(|r| r.is_active())?;
        record.end_time = Some(now);
        record.status = BreakStatus::Completed;
        let finished = record.clone();
        tracing::info!(employee_id, "break ended");
        Some(finished)
    }

    /// Whether the employee is currently on an (unelapsed) break
    pub fn is_on_break(&self, employee_id: &str) -> bool {
        self.is_on_break_at(employee_id, now_millis())
    }

    fn is_on_break_at(&self, employee_id: &str, now: i64) -> bool {
        let Some(mut entry) = self.inner.records.get_mut(employee_id) else {
            return false;
        };
        finish_elapsed(&mut entry.records, now);
        entry.records.iter().any(BreakRecord::is_active)
    }

    /// Whether any break (active or completed) exists for the employee
    /// in this working day
    pub fn has_had_break(&self, employee_id: &str) -> bool {
        self.inner
            .records
            .get(employee_id)
            .is_some_and(|entry| !entry.records.is_empty())
    }

    /// Minutes left on the active break, 0 when none is active
    pub fn remaining_minutes(&self, employee_id: &str) -> i64 {
        self.remaining_minutes_at(employee_id, now_millis())
    }

    fn remaining_minutes_at(&self, employee_id: &str, now: i64) -> i64 {
        let Some(mut entry) = self.inner.records.get_mut(employee_id) else {
            return 0;
        };
        finish_elapsed(&mut entry.records, now);
        entry
            .records
            .iter()
            .find(|r| r.is_active())
            .map(|r| r.remaining_minutes(now))
            .unwrap_or(0)
    }

    /// Break history for one employee
    pub fn breaks_for(&self, employee_id: &str) -> Vec<BreakRecord> {
        self.inner
            .records
            .get(employee_id)
            .map(|entry| entry.records.clone())
            .unwrap_or_default()
    }

    /// `(id, name)` of every employee currently on break
    pub fn on_break_employees(&self) -> Vec<(String, String)> {
        let now = now_millis();
        let mut on_break: Vec<(String, String)> = self
            .inner
            .records
            .iter_mut()
            .filter_map(|mut entry| {
                finish_elapsed(&mut entry.records, now);
                entry
                    .records
                    .iter()
                    .any(BreakRecord::is_active)
                    .then(|| (entry.key().clone(), entry.name.clone()))
            })
            .collect();
        on_break.sort();
        on_break
    }

    /// Arm (or re-arm) the auto-completion timer for an active break.
    ///
    /// A previous timer for the same employee is cancelled first, so
    /// re-arming on every `start_break` never leaves a stale timer
    /// pointed at a newer break. Must run inside a tokio runtime.
    pub fn arm_auto_complete(&self, employee_id: &str, duration_minutes: i64) {
        let token = CancellationToken::new();
        if let Some(previous) = self
            .inner
            .timers
            .insert(employee_id.to_string(), token.clone())
        {
            previous.cancel();
        }

        let tracker = self.clone();
        let employee_id = employee_id.to_string();
        let sleep = Duration::from_secs(duration_minutes.max(0) as u64 * 60);
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(sleep) => {
                    tracker.complete_active(&employee_id);
                }
                _ = token.cancelled() => {}
            }
        });
    }

    /// Timer path: complete the active break at its scheduled end.
    /// No active break means a manual end already happened - no-op.
    fn complete_active(&self, employee_id: &str) {
        let Some(mut entry) = self.inner.records.get_mut(employee_id) else {
            return;
        };
        if let Some(record) = entry.records.iter_mut().find(|r| r.is_active()) {
            record.end_time = Some(record.scheduled_end());
            record.status = BreakStatus::Completed;
            tracing::info!(employee_id, "break auto-completed");
        }
    }
}

/// Complete any active record whose duration has elapsed at `now`
fn finish_elapsed(records: &mut [BreakRecord], now: i64) {
    for record in records.iter_mut() {
        if record.is_active() && record.is_elapsed(now) {
            record.end_time = Some(record.scheduled_end());
            record.status = BreakStatus::Completed;
        }
    }
}
