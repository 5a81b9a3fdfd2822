//! Debounced write-back of the full slice set.
//!
//! Every state mutation reschedules a single pending timer task; only after
//! the quiet period passes with no further mutation does one write per slice
//! go out. Rapid mutations therefore persist only the final state, and
//! transient intermediate states never reach disk.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::join_all;
use reword_domain::AppSnapshot;
use tokio::task::JoinHandle;

use crate::serialization::snapshot_slice_values;
use crate::traits::SliceStore;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(800);

pub struct AutosaveScheduler {
    store: Arc<dyn SliceStore>,
    quiet_period: Duration,
    suspended: Arc<AtomicBool>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl AutosaveScheduler {
    pub fn new(store: Arc<dyn SliceStore>, quiet_period: Duration) -> Self {
        Self {
            store,
            quiet_period,
            suspended: Arc::new(AtomicBool::new(false)),
            pending: Mutex::new(None),
        }
    }

    /// Gate the scheduler off. Set while the load phase or a backup import
    /// is in progress so a half-initialized or mid-import state is never
    /// persisted. A pending timer that fires while suspended writes nothing.
    pub fn suspend(&self) {
        self.suspended.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.suspended.store(false, Ordering::SeqCst);
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::SeqCst)
    }

    /// Record a mutation: cancel the pending timer, if any, and start a new
    /// one carrying the post-mutation snapshot. Must run inside a tokio
    /// runtime.
    pub fn schedule(&self, snapshot: AppSnapshot) {
        if self.is_suspended() {
            tracing::debug!("Autosave suppressed, dropping schedule request");
            return;
        }

        let store = Arc::clone(&self.store);
        let suspended = Arc::clone(&self.suspended);
        let quiet_period = self.quiet_period;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            if suspended.load(Ordering::SeqCst) {
                tracing::debug!("Autosave timer elapsed while suspended, skipping write");
                return;
            }
            write_all_slices(store.as_ref(), &snapshot).await;
        });

        let mut pending = self.pending.lock().expect("autosave timer lock poisoned");
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Write the given snapshot immediately, bypassing the quiet period.
    /// Cancels any pending timer first so the flush cannot be followed by a
    /// stale write.
    pub async fn flush_now(&self, snapshot: &AppSnapshot) {
        {
            let mut pending = self.pending.lock().expect("autosave timer lock poisoned");
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
        write_all_slices(self.store.as_ref(), snapshot).await;
    }
}

/// One write per slice, all in parallel. Individual failures are logged and
/// do not abort the remaining writes; the failed slice stays dirty in memory
/// and the next settle retries it.
async fn write_all_slices(store: &dyn SliceStore, snapshot: &AppSnapshot) {
    let values = match snapshot_slice_values(snapshot) {
        Ok(values) => values,
        Err(e) => {
            tracing::error!("Autosave could not serialize state: {}", e);
            return;
        }
    };

    let writes = values.into_iter().map(|(key, value)| async move {
        (key, store.write_value(key, value).await)
    });

    let mut failed = 0usize;
    for (key, result) in join_all(writes).await {
        if let Err(e) = result {
            failed += 1;
            tracing::error!("Autosave failed for slice '{}': {}", key, e);
        }
    }

    if failed == 0 {
        tracing::debug!("Autosave settled, all slices written");
    } else {
        tracing::warn!("Autosave settled with {} failed slice write(s)", failed);
    }
}
