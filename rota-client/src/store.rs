//! Schedule store trait and in-memory implementation
//!
//! The trait is the seam between the editing session and the network;
//! [`MemoryStore`] backs tests and demos without a server, including
//! injectable failures for exercising the rollback path.

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{Setup, SetupUpdate};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Read/replace access to schedule documents keyed by schedule id
#[async_trait]
pub trait ScheduleStore: Send + Sync + 'static {
    async fn fetch(&self, schedule_id: &str) -> ClientResult<Setup>;

    /// Replace the document and return the authoritative server copy
    async fn replace(&self, schedule_id: &str, update: &SetupUpdate) -> ClientResult<Setup>;
}

/// In-memory schedule store
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<String, Setup>,
    fail_next_replace: AtomicBool,
    replace_count: AtomicUsize,
    /// Artificial latency per replace, for exercising save coalescing
    replace_delay: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add artificial latency to every replace call
    pub fn with_replace_delay(mut self, delay: Duration) -> Self {
        self.replace_delay = Some(delay);
        self
    }

    /// Seed a document
    pub fn insert(&self, setup: Setup) {
        self.documents.insert(setup.id.clone(), setup);
    }

    /// Make the next replace call fail with a store error
    pub fn fail_next_replace(&self) {
        self.fail_next_replace.store(true, Ordering::SeqCst);
    }

    /// Number of replace calls that reached the store
    pub fn replace_count(&self) -> usize {
        self.replace_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn fetch(&self, schedule_id: &str) -> ClientResult<Setup> {
        self.documents
            .get(schedule_id)
            .map(|doc| doc.clone())
            .ok_or_else(|| ClientError::NotFound(schedule_id.to_string()))
    }

    async fn replace(&self, schedule_id: &str, update: &SetupUpdate) -> ClientResult<Setup> {
        if let Some(delay) = self.replace_delay {
            tokio::time::sleep(delay).await;
        }
        self.replace_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_replace.swap(false, Ordering::SeqCst) {
            return Err(ClientError::Internal("injected store failure".to_string()));
        }
        if !self.documents.contains_key(schedule_id) {
            return Err(ClientError::NotFound(schedule_id.to_string()));
        }

        let replaced = Setup {
            id: schedule_id.to_string(),
            name: update.name.clone(),
            start_date: update.start_date.clone(),
            end_date: update.end_date.clone(),
            week_schedule: update.week_schedule.clone(),
            employees: update.employees.clone(),
            uploaded_schedules: update.uploaded_schedules.clone(),
        };
        self.documents.insert(schedule_id.to_string(), replaced.clone());
        Ok(replaced)
    }
}
