use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::PricePoint;
use crate::models::range::ChartRange;

/// Trait abstraction over the remote market-data provider.
///
/// The store and services only ever talk to this trait. If the API goes
/// away or changes shape, only the one implementation is replaced — the
/// rest of the codebase (and every test, via mock impls) is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current top assets ranked by market cap, descending,
    /// USD-denominated, with 24h change data. One wholesale snapshot.
    async fn fetch_snapshot(&self) -> Result<Vec<Asset>, CoreError>;

    /// Fetch the historical price series for one asset over one range,
    /// USD-denominated. Samples are (millisecond timestamp, price) pairs.
    async fn fetch_market_chart(
        &self,
        id: &str,
        range: ChartRange,
    ) -> Result<Vec<PricePoint>, CoreError>;
}
