pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
#[cfg(not(target_arch = "wasm32"))]
pub mod refresh;
pub mod services;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, warn};

use errors::CoreError;
use models::asset::Asset;
use models::history::{HistoricalSeries, HistoryCache};
use models::range::ChartRange;
use providers::coingecko::CoinGeckoProvider;
use providers::traits::MarketDataProvider;
use services::history_service::HistoryService;
use services::snapshot_service::SnapshotService;

/// One historical fetch is identified by (asset id, range) — both levels,
/// always.
type SeriesKey = (String, ChartRange);

/// Everything consumers render from, behind one lock.
///
/// The lock is only ever held for synchronous transitions, never across a
/// network await, so a consumer can never observe merged data with a stale
/// loading flag.
#[derive(Default)]
struct StoreState {
    assets: Vec<Asset>,
    search_term: String,
    is_loading: bool,
    error: Option<String>,
    selected_id: Option<String>,
    history: HistoryCache,
    is_chart_loading: bool,
    is_modal_open: bool,
}

/// Main entry point for the crypto dashboard core.
///
/// Holds the live market snapshot, the historical-series cache, and the
/// UI-facing flags (loading, error, selection, search, modal), and exposes
/// the actions the list view and chart view drive. Construct one per
/// mounted dashboard and share it via `Arc`; independent instances never
/// share state.
///
/// All mutation goes through the action methods — no field is exposed for
/// direct writes.
pub struct DashboardStore {
    snapshot_service: SnapshotService,
    history_service: HistoryService,
    state: Mutex<StoreState>,
    /// Historical fetches currently on the wire. A second request for a
    /// key already here coalesces onto the pending fetch instead of
    /// issuing its own.
    in_flight: Mutex<HashMap<SeriesKey, watch::Receiver<()>>>,
}

impl std::fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("DashboardStore")
            .field("assets", &state.assets.len())
            .field("cached_series", &state.history.series_count())
            .field("selected_id", &state.selected_id)
            .field("is_loading", &state.is_loading)
            .field("is_chart_loading", &state.is_chart_loading)
            .field("error", &state.error)
            .finish()
    }
}

impl DashboardStore {
    /// Create a store backed by the given provider.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            snapshot_service: SnapshotService::new(Arc::clone(&provider)),
            history_service: HistoryService::new(provider),
            state: Mutex::new(StoreState::default()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Create a store backed by the public CoinGecko API.
    pub fn with_coingecko() -> Self {
        Self::new(Arc::new(CoinGeckoProvider::new()))
    }

    // ── Snapshot ────────────────────────────────────────────────────

    /// Fetch the ranked market snapshot and replace the asset list
    /// wholesale.
    ///
    /// On failure the previous asset list is kept — stale data beats a
    /// blank view — and the error field carries a human-readable message.
    /// The loading flag is true for the duration of the request either way.
    ///
    /// Overlapping calls are not serialized: both run to completion and
    /// whichever response merges last wins. Consumers are expected to
    /// disable their manual refresh trigger while `is_loading()` is true,
    /// which keeps overlap down to the periodic-refresh edge case.
    pub async fn refresh_snapshot(&self) -> Result<(), CoreError> {
        {
            let mut state = self.lock_state();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.snapshot_service.fetch_ranked().await;

        let mut state = self.lock_state();
        state.is_loading = false;
        match result {
            Ok(assets) => {
                debug!("Snapshot replaced: {} assets", assets.len());
                state.assets = assets;
                Ok(())
            }
            Err(e) => {
                warn!("Snapshot refresh failed: {e}");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ── Selection & historical series ───────────────────────────────

    /// Select an asset and open the detail view. Triggers a fetch of the
    /// default range iff that exact (id, default-range) pair is not
    /// already cached.
    pub async fn select_asset(&self, id: &str) -> Result<(), CoreError> {
        {
            let mut state = self.lock_state();
            state.selected_id = Some(id.to_string());
            state.is_modal_open = true;
        }
        self.change_range(id, ChartRange::default()).await
    }

    /// Switch the detail view to a different range.
    ///
    /// A cache hit is a pure read: no request, no flag changes. A miss
    /// performs one fetch with `is_chart_loading()` true for its duration;
    /// on failure the cache stays empty for the key (re-selecting the
    /// range retries) and the error field is set.
    ///
    /// Concurrent calls for the same (id, range) key coalesce onto the
    /// single pending fetch; the coalesced caller returns `Ok(())` once
    /// that fetch settles and reads the outcome from store state.
    pub async fn change_range(&self, id: &str, range: ChartRange) -> Result<(), CoreError> {
        if self.lock_state().history.contains(id, range) {
            debug!("Cache hit for ({id}, {range})");
            return Ok(());
        }
        debug!("Cache miss for ({id}, {range})");

        let key: SeriesKey = (id.to_string(), range);

        // Decide owner-vs-waiter under one lock so exactly one fetch runs
        // per key.
        let (tx, mut pending) = {
            let mut in_flight = self.lock_in_flight();
            match in_flight.get(&key) {
                Some(rx) => (None, Some(rx.clone())),
                None => {
                    let (tx, rx) = watch::channel(());
                    in_flight.insert(key.clone(), rx);
                    (Some(tx), None)
                }
            }
        };

        if let Some(rx) = pending.as_mut() {
            // Another call owns this fetch; wait until it settles. The
            // sender is dropped on completion, which wakes us here.
            let _ = rx.changed().await;
            return Ok(());
        }

        self.lock_state().is_chart_loading = true;

        let result = self.history_service.fetch_series(id, range).await;

        {
            let mut state = self.lock_state();
            state.is_chart_loading = false;
            match &result {
                Ok(series) => state.history.insert(id, series.clone()),
                Err(e) => {
                    warn!("Historical fetch for ({id}, {range}) failed: {e}");
                    state.error = Some(e.to_string());
                }
            }
        }

        self.lock_in_flight().remove(&key);
        drop(tx); // wakes any coalesced waiters

        result.map(|_| ())
    }

    /// Close the detail view. The selected id and every cached series
    /// survive, so reopening the same asset is an instant cache hit.
    pub fn close_detail(&self) {
        self.lock_state().is_modal_open = false;
    }

    // ── Search ──────────────────────────────────────────────────────

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.lock_state().search_term = term.into();
    }

    pub fn search_term(&self) -> String {
        self.lock_state().search_term.clone()
    }

    /// The current snapshot filtered by the search term: the ordered
    /// subsequence of assets whose name or symbol contains the term
    /// case-insensitively. An empty term yields the full list unchanged.
    ///
    /// Recomputed on every read — only the term is stored, never the
    /// filtered list.
    pub fn filtered_assets(&self) -> Vec<Asset> {
        let state = self.lock_state();
        if state.search_term.is_empty() {
            return state.assets.clone();
        }
        state
            .assets
            .iter()
            .filter(|a| a.matches(&state.search_term))
            .cloned()
            .collect()
    }

    // ── Read surface ────────────────────────────────────────────────

    /// The current snapshot, in provider (market-cap descending) order.
    pub fn assets(&self) -> Vec<Asset> {
        self.lock_state().assets.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().is_loading
    }

    /// Human-readable message from the most recent failure, if any.
    pub fn error(&self) -> Option<String> {
        self.lock_state().error.clone()
    }

    pub fn selected_id(&self) -> Option<String> {
        self.lock_state().selected_id.clone()
    }

    /// The selected asset's snapshot record, if it is still in the
    /// current snapshot.
    pub fn selected_asset(&self) -> Option<Asset> {
        let state = self.lock_state();
        let id = state.selected_id.as_deref()?;
        state.assets.iter().find(|a| a.id == id).cloned()
    }

    pub fn is_modal_open(&self) -> bool {
        self.lock_state().is_modal_open
    }

    pub fn is_chart_loading(&self) -> bool {
        self.lock_state().is_chart_loading
    }

    /// The cached series for an exact (id, range) pair, if present.
    pub fn series(&self, id: &str, range: ChartRange) -> Option<HistoricalSeries> {
        self.lock_state().history.get(id, range).cloned()
    }

    /// Ranges already cached for an asset, ascending by day-count.
    pub fn cached_ranges(&self, id: &str) -> Vec<ChartRange> {
        self.lock_state().history.cached_ranges(id)
    }

    /// Number of distinct assets with at least one cached series.
    pub fn cached_asset_count(&self) -> usize {
        self.lock_state().history.asset_count()
    }

    /// Total number of cached (id, range) series.
    pub fn cached_series_count(&self) -> usize {
        self.lock_state().history.series_count()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[allow(clippy::type_complexity)]
    fn lock_in_flight(&self) -> MutexGuard<'_, HashMap<SeriesKey, watch::Receiver<()>>> {
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }
}
