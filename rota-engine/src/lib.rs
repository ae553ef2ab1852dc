//! Rota Engine - daily schedule reconciliation
//!
//! The in-memory core of the shift-scheduling editor: given a
//! week-structured [`shared::Setup`] it computes assignment state,
//! availability and break status, and applies mutations while keeping
//! the derived views (assigned / unassigned / available-for-slot)
//! consistent.
//!
//! All operations here are synchronous and non-blocking; the only async
//! piece is the break tracker's auto-completion timer. Persistence is a
//! separate concern (see the `rota-client` crate).

pub mod actions;
pub mod availability;
pub mod breaks;
pub mod directory;
pub mod time;

pub use actions::{AddEmployeeRequest, AddPositionRequest, Applied, Revert};
pub use availability::{AvailabilityQuery, available_employees};
pub use breaks::BreakTracker;
pub use directory::{
    is_on_current_shift, is_on_shift_at, scheduled_employees, unassigned_employees,
};
