//! Debounced task scheduling
//!
//! Every call to [`Debouncer::schedule`] supersedes the previous one: the
//! pending task is aborted and a generation counter is bumped so a task that
//! already woke up still sees it is stale and skips its work.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Runs only the most recently scheduled task, after a quiet period
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current generation; increases on every schedule and cancel
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a scheduled task has not yet finished
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Schedule `task` to run after the quiet period, replacing any pending task
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, task: F) -> u64
    where
        F: FnOnce() + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort_pending();

        let current = Arc::clone(&self.generation);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                trace!(generation, "debounced task running");
                task();
            } else {
                trace!(generation, "stale debounced task skipped");
            }
        }));

        generation
    }

    /// Drop the pending task, returning whether one was still waiting
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.abort_pending();
        was_pending
    }

    /// Wait for the pending task to run
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            // An aborted task resolves with a cancellation error
            let _ = handle.await;
        }
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
