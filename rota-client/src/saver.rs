//! Coalescing write path for schedule documents
//!
//! Rapid sequential UI actions would otherwise fire one PUT each. The
//! saver keeps at most one in-flight write per schedule id: a save
//! requested while one is in flight inside the debounce window joins it
//! (shared future) instead of issuing a duplicate; outside the window
//! the in-flight write is drained first, so two writes for the same id
//! never race each other.

use crate::store::ScheduleStore;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use shared::error::AppError;
use shared::models::Setup;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Default debounce window for joining an in-flight save
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

type SharedSave = Shared<BoxFuture<'static, Result<Setup, AppError>>>;

struct Inflight {
    started: Instant,
    future: SharedSave,
}

/// Outcome of a save request
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// Authoritative server copy returned by the store
    pub setup: Setup,
    /// The caller joined an earlier in-flight write; `setup` may
    /// predate the caller's own local mutations
    pub joined: bool,
}

/// Serialized, coalescing writer for one schedule document
pub struct ScheduleSaver<S: ScheduleStore> {
    store: Arc<S>,
    schedule_id: String,
    debounce: Duration,
    inflight: Mutex<Option<Inflight>>,
}

impl<S: ScheduleStore> ScheduleSaver<S> {
    pub fn new(store: Arc<S>, schedule_id: impl Into<String>) -> Self {
        Self {
            store,
            schedule_id: schedule_id.into(),
            debounce: SAVE_DEBOUNCE,
            inflight: Mutex::new(None),
        }
    }

    /// Override the debounce window (tests, aggressive UIs)
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }

    /// Persist the given snapshot.
    ///
    /// Returns the authoritative copy the store responded with and
    /// whether this call joined an already in-flight write.
    pub async fn save(&self, setup: &Setup) -> Result<SaveOutcome, AppError> {
        loop {
            let existing = {
                let guard = self.inflight.lock().await;
                guard.as_ref().map(|i| (i.future.clone(), i.started))
            };

            match existing {
                // Inside the window: join the in-flight write
                Some((future, started)) if started.elapsed() < self.debounce => {
                    let setup = future.await?;
                    return Ok(SaveOutcome { setup, joined: true });
                }
                // Outside the window: drain it, then issue our own
                Some((stale, _)) => {
                    let _ = stale.clone().await;
                    let mut guard = self.inflight.lock().await;
                    if guard.as_ref().is_some_and(|i| i.future.ptr_eq(&stale)) {
                        *guard = None;
                    }
                }
                None => {
                    let future = {
                        let mut guard = self.inflight.lock().await;
                        if guard.is_some() {
                            // Another caller slipped in; reevaluate
                            continue;
                        }
                        let future = self.issue(setup);
                        *guard = Some(Inflight {
                            started: Instant::now(),
                            future: future.clone(),
                        });
                        future
                    };

                    let result = future.clone().await;
                    let mut guard = self.inflight.lock().await;
                    if guard.as_ref().is_some_and(|i| i.future.ptr_eq(&future)) {
                        *guard = None;
                    }
                    return result.map(|setup| SaveOutcome {
                        setup,
                        joined: false,
                    });
                }
            }
        }
    }

    fn issue(&self, setup: &Setup) -> SharedSave {
        let store = Arc::clone(&self.store);
        let schedule_id = self.schedule_id.clone();
        let update = setup.as_update();
        let save_id = uuid::Uuid::new_v4();
        async move {
            tracing::debug!(%save_id, schedule_id = schedule_id.as_str(), "issuing schedule write");
            store
                .replace(&schedule_id, &update)
                .await
                .map_err(|err| {
                    tracing::warn!(%save_id, error = %err, "schedule write failed");
                    AppError::from(err)
                })
        }
        .boxed()
        .shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn seeded_store(delay_ms: u64) -> Arc<MemoryStore> {
        let store =
            MemoryStore::new().with_replace_delay(Duration::from_millis(delay_ms));
        store.insert(Setup::new("s1", "2026-08-03", "2026-08-09"));
        Arc::new(store)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_saves_join_the_inflight_write() {
        let store = seeded_store(100);
        let saver = Arc::new(ScheduleSaver::new(Arc::clone(&store), "s1"));
        let setup = store.fetch("s1").await.unwrap();

        let first = tokio::spawn({
            let saver = Arc::clone(&saver);
            let setup = setup.clone();
            async move { saver.save(&setup).await }
        });
        // Give the first save a chance to register as in-flight
        tokio::task::yield_now().await;

        let second = saver.save(&setup).await.unwrap();
        let first = first.await.unwrap().unwrap();

        assert!(!first.joined);
        assert!(second.joined);
        // One write reached the store for two save requests
        assert_eq!(store.replace_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_saves_outside_window_are_serialized_not_joined() {
        let store = seeded_store(100);
        let saver = Arc::new(
            ScheduleSaver::new(Arc::clone(&store), "s1")
                .with_debounce(Duration::from_millis(10)),
        );
        let setup = store.fetch("s1").await.unwrap();

        let first = tokio::spawn({
            let saver = Arc::clone(&saver);
            let setup = setup.clone();
            async move { saver.save(&setup).await }
        });
        tokio::task::yield_now().await;
        // Past the debounce window while the first write is still in
        // flight: the second save must wait it out, then write itself
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second = saver.save(&setup).await.unwrap();
        let first = first.await.unwrap().unwrap();

        assert!(!first.joined);
        assert!(!second.joined);
        assert_eq!(store.replace_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_save_clears_the_flight() {
        let store = seeded_store(0);
        store.fail_next_replace();
        let saver = ScheduleSaver::new(Arc::clone(&store), "s1");
        let setup = store.fetch("s1").await.unwrap();

        let err = saver.save(&setup).await.unwrap_err();
        assert!(err.is_retryable());
        // The failed flight was cleared; the next save issues fresh
        assert!(saver.save(&setup).await.is_ok());
    }

    #[tokio::test]
    async fn test_save_returns_authoritative_copy() {
        let store = seeded_store(0);
        let saver = ScheduleSaver::new(Arc::clone(&store), "s1");
        let mut setup = store.fetch("s1").await.unwrap();
        setup.name = Some("Week 32".to_string());

        let outcome = saver.save(&setup).await.unwrap();
        assert!(!outcome.joined);
        assert_eq!(outcome.setup.name.as_deref(), Some("Week 32"));
        assert_eq!(outcome.setup.id, "s1");
    }
}
