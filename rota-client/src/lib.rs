//! Rota Client - persistence adapter for the schedule store
//!
//! Provides the network boundary of the scheduling editor (HTTP calls
//! to the key-value schedule store), the save-coalescing write path,
//! and [`ScheduleSession`], the state container tying the in-memory
//! engine to persistence with optimistic updates and field-level
//! rollback.

pub mod config;
pub mod error;
pub mod http;
pub mod saver;
pub mod session;
pub mod store;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use saver::{SaveOutcome, ScheduleSaver};
pub use session::ScheduleSession;
pub use store::{MemoryStore, ScheduleStore};

// Re-export shared types for convenience
pub use shared::{AppError, AppResult, Setup};
