use std::sync::Arc;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::history::HistoricalSeries;
use crate::models::range::ChartRange;
use crate::providers::traits::MarketDataProvider;

/// Fetches per-asset historical series and normalizes them into
/// cache-ready form.
///
/// The provider reports samples ascending by timestamp already; the
/// ordering is enforced here anyway since the cache invariant depends
/// on it. Samples with a non-finite price are dropped.
pub struct HistoryService {
    provider: Arc<dyn MarketDataProvider>,
}

impl HistoryService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch one (id, range) series. Does not consult or fill any cache —
    /// cache discipline is the store's job, so that the lookup and the
    /// in-flight guard live next to each other.
    pub async fn fetch_series(
        &self,
        id: &str,
        range: ChartRange,
    ) -> Result<HistoricalSeries, CoreError> {
        let mut points = self.provider.fetch_market_chart(id, range).await?;

        let raw_len = points.len();
        points.retain(|p| p.price.is_finite());
        if points.len() < raw_len {
            debug!(
                "Dropped {} non-finite samples from {} {} series",
                raw_len - points.len(),
                id,
                range.label()
            );
        }
        points.sort_by_key(|p| p.timestamp_ms);

        debug!(
            "Fetched {} {} series: {} samples",
            id,
            range.label(),
            points.len()
        );
        Ok(HistoricalSeries { range, points })
    }
}
