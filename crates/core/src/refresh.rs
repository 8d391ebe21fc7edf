use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::DashboardStore;

/// How often the dashboard re-fetches the market snapshot by default.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// A repeating snapshot refresh tied to the consuming view's lifetime.
///
/// The task refreshes immediately on spawn (so a freshly mounted view is
/// never empty longer than one request), then on every period tick.
/// Dropping the handle aborts the task, so no tick can outlive the view
/// and write into a store nobody is rendering anymore.
///
/// Refresh failures are absorbed into the store's error field like any
/// manual refresh; the task keeps ticking.
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// Spawn a refresh loop with the default 60 s period.
    pub fn spawn(store: Arc<DashboardStore>) -> Self {
        Self::spawn_with_period(store, DEFAULT_REFRESH_PERIOD)
    }

    /// Spawn a refresh loop with a custom period.
    pub fn spawn_with_period(store: Arc<DashboardStore>, period: Duration) -> Self {
        info!("Starting periodic snapshot refresh every {:?}", period);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                // First tick completes immediately: refresh on mount.
                ticker.tick().await;
                if let Err(e) = store.refresh_snapshot().await {
                    warn!("Periodic snapshot refresh failed: {e}");
                }
            }
        });
        Self { handle }
    }

    /// Stop the refresh loop. Idempotent; also runs on drop.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the underlying task has fully stopped.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
