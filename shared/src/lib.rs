//! Shared types for the Rota scheduling framework
//!
//! Common types used across multiple crates including domain models,
//! error types, and utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    Area, BreakRecord, BreakStatus, DaySchedule, Employee, Position, Setup, SetupUpdate, TimeBlock,
};
