//! Domain models for the scheduling framework

pub mod break_record;
pub mod employee;
pub mod position;
pub mod setup;
pub mod time_block;

pub use break_record::{BreakRecord, BreakStatus};
pub use employee::{Area, Employee};
pub use position::{Position, UNKNOWN_EMPLOYEE, is_placeholder_name};
pub use setup::{Setup, SetupUpdate};
pub use time_block::{DaySchedule, TimeBlock};
