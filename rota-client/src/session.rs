//! Schedule editing session
//!
//! The single state container for one manager editing one schedule:
//! owns the in-memory `Setup`, the active day, the break tracker and
//! the write path. Every mutation goes through the engine's actions so
//! the model invariants are enforced at one boundary, then follows the
//! optimistic-update contract: applied locally first, persisted in the
//! background, and rolled back field-by-field when the store rejects
//! the write.

use crate::saver::ScheduleSaver;
use crate::store::ScheduleStore;
use rota_engine::actions::{self, AddEmployeeRequest, AddPositionRequest, Applied};
use rota_engine::availability::{self, AvailabilityQuery};
use rota_engine::breaks::BreakTracker;
use rota_engine::directory;
use rota_engine::time::{normalize_day_name, parse_time_to_minutes, today_day_name};
use shared::error::{AppError, AppResult};
use shared::models::{BreakRecord, Employee, Setup};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// One manager's editing session over one schedule document
pub struct ScheduleSession<S: ScheduleStore> {
    store: Arc<S>,
    saver: ScheduleSaver<S>,
    breaks: BreakTracker,
    setup: Setup,
    active_day: String,
    loaded_at: Instant,
}

impl<S: ScheduleStore> ScheduleSession<S> {
    /// Load the schedule and open a session on today's day
    pub async fn open(store: Arc<S>, schedule_id: &str) -> Result<Self, crate::ClientError> {
        let setup = store.fetch(schedule_id).await?;
        tracing::info!(schedule_id, "schedule session opened");
        Ok(Self {
            saver: ScheduleSaver::new(Arc::clone(&store), schedule_id),
            store,
            breaks: BreakTracker::new(),
            setup,
            active_day: today_day_name().to_string(),
            loaded_at: Instant::now(),
        })
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    pub fn active_day(&self) -> &str {
        &self.active_day
    }

    /// Switch the active day; input tolerates upload-style spellings
    pub fn set_active_day(&mut self, day: &str) -> AppResult<()> {
        let canonical = normalize_day_name(day)
            .ok_or_else(|| AppError::validation(format!("Unrecognized day name: {}", day)))?;
        self.active_day = canonical.to_string();
        Ok(())
    }

    /// Re-fetch the authoritative document, dropping local-only state
    pub async fn reload(&mut self) -> Result<(), crate::ClientError> {
        self.setup = self.store.fetch(&self.setup.id).await?;
        self.loaded_at = Instant::now();
        Ok(())
    }

    /// Whether the local snapshot is older than `window` (callers that
    /// cache a session may use ~30 minutes)
    pub fn is_snapshot_stale(&self, window: Duration) -> bool {
        self.loaded_at.elapsed() > window
    }

    // ==================== Derived views ====================

    /// Employees in play for the active day
    pub fn scheduled_employees(&self) -> Vec<Employee> {
        directory::scheduled_employees(&self.setup, &self.active_day)
    }

    /// Scheduled employees holding no position today, alphabetical
    pub fn unassigned_employees(&self) -> Vec<Employee> {
        let scheduled = self.scheduled_employees();
        directory::unassigned_employees(&scheduled, &self.active_day, &self.setup.week_schedule)
    }

    /// Employees eligible for an arbitrary slot
    pub fn available_employees(&self, query: &AvailabilityQuery<'_>) -> Vec<Employee> {
        availability::available_employees(
            self.setup.day_schedule(&self.active_day),
            &self.scheduled_employees(),
            query,
        )
    }

    /// Employees eligible to fill an existing position, derived from
    /// its block window and section; empty when the id is stale
    pub fn available_for_position(
        &self,
        position_id: &str,
        name_filter: Option<&str>,
    ) -> Vec<Employee> {
        let Some(day) = self.setup.day_schedule(&self.active_day) else {
            return Vec::new();
        };
        let Some((block, position)) = day.find_position(position_id) else {
            tracing::debug!(position_id, "availability: position not found");
            return Vec::new();
        };
        let query = AvailabilityQuery {
            block_start: parse_time_to_minutes(&block.start),
            block_end: parse_time_to_minutes(&block.end),
            editing_position_id: Some(position_id),
            required_area: Some(position.section()),
            name_filter,
        };
        availability::available_employees(Some(day), &self.scheduled_employees(), &query)
    }

    // ==================== Mutations ====================

    /// Bind an employee to a position. `Ok(false)` means the reference
    /// went stale (concurrent edit) and nothing changed.
    pub async fn assign(
        &mut self,
        position_id: &str,
        employee_id: &str,
        employee_name: &str,
    ) -> Result<bool, AppError> {
        let Some(applied) = actions::assign(
            &mut self.setup,
            &self.active_day,
            position_id,
            employee_id,
            employee_name,
        ) else {
            return Ok(false);
        };
        self.commit(applied).await?;
        Ok(true)
    }

    /// Clear a position's binding
    pub async fn remove(&mut self, position_id: &str) -> Result<bool, AppError> {
        let Some(applied) = actions::remove(&mut self.setup, &self.active_day, position_id) else {
            return Ok(false);
        };
        self.commit(applied).await?;
        Ok(true)
    }

    /// Rename an employee's display name across the active day
    pub async fn rename_employee(
        &mut self,
        employee_id: &str,
        new_name: &str,
    ) -> Result<bool, AppError> {
        let Some(applied) =
            actions::rename_employee(&mut self.setup, &self.active_day, employee_id, new_name)
        else {
            return Ok(false);
        };
        self.commit(applied).await?;
        Ok(true)
    }

    /// Delete an employee everywhere - across all days, both rosters
    pub async fn delete_employee(&mut self, employee_id: &str) -> Result<bool, AppError> {
        let Some(applied) = actions::delete_employee(&mut self.setup, employee_id) else {
            return Ok(false);
        };
        self.commit(applied).await?;
        Ok(true)
    }

    /// Add an ad-hoc employee to the active day's roster
    pub async fn add_employee(&mut self, request: &AddEmployeeRequest) -> Result<(), AppError> {
        let applied = actions::add_employee(&mut self.setup, &self.active_day, request)?;
        self.commit(applied).await
    }

    /// Add an ad-hoc position to a time block in the active day
    pub async fn add_position(&mut self, request: &AddPositionRequest) -> Result<(), AppError> {
        let applied = actions::add_position(&mut self.setup, &self.active_day, request)?;
        self.commit(applied).await
    }

    // ==================== Breaks ====================

    /// Start a break for an employee, arming auto-completion.
    ///
    /// Break state is session-local (keyed by employee id) and never
    /// mutates the schedule document.
    pub fn start_break(&self, employee_id: &str, duration_minutes: i64) -> AppResult<BreakRecord> {
        let employee_name = self
            .scheduled_employees()
            .into_iter()
            .find(|e| e.id == employee_id)
            .map(|e| e.name)
            .unwrap_or_else(|| employee_id.to_string());

        let record = self
            .breaks
            .start_break(employee_id, &employee_name, duration_minutes)?;
        self.breaks.arm_auto_complete(employee_id, duration_minutes);
        Ok(record)
    }

    /// End an employee's active break; no-op when none is active
    pub fn end_break(&self, employee_id: &str) -> Option<BreakRecord> {
        self.breaks.end_break(employee_id)
    }

    /// Break queries (status, history, remaining time)
    pub fn breaks(&self) -> &BreakTracker {
        &self.breaks
    }

    // ==================== Persistence ====================

    /// Persist the current state and reconcile the store's response.
    ///
    /// On failure only the fields touched by this mutation are
    /// reverted, so other optimistic edits survive; the error is
    /// surfaced for the caller to retry.
    async fn commit(&mut self, applied: Applied) -> Result<(), AppError> {
        let command_id = uuid::Uuid::new_v4();
        match self.saver.save(&self.setup).await {
            Ok(outcome) => {
                // A joined save predates this mutation; keep local
                // state and let the next issued write carry it.
                if !outcome.joined {
                    self.setup = outcome.setup;
                }
                tracing::debug!(%command_id, joined = outcome.joined, "mutation persisted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%command_id, error = %err, "persist failed, rolling back mutation");
                actions::revert(&mut self.setup, applied.revert);
                Err(err)
            }
        }
    }
}
