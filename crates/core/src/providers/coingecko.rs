use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::history::PricePoint;
use crate::models::range::ChartRange;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// How many assets one snapshot holds.
const SNAPSHOT_PAGE_SIZE: u32 = 20;

/// CoinGecko API provider for live and historical cryptocurrency prices.
///
/// - **Free**: no API key required for the public endpoints used here.
/// - **Endpoints**: `/coins/markets` (ranked snapshot),
///   `/coins/{id}/market_chart` (per-asset series).
///
/// Note: CoinGecko identifies assets by lowercase slugs ("bitcoin"),
/// which double as the store's asset ids.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at a different endpoint (mock server, mirror).
    pub fn with_base_url(base_url: &str) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

/// `/coins/{id}/market_chart` body. Only the price samples are used;
/// volume and market-cap series are ignored.
#[derive(Deserialize)]
struct MarketChartResponse {
    prices: Vec<(i64, f64)>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_snapshot(&self) -> Result<Vec<Asset>, CoreError> {
        let url = format!("{}/coins/markets", self.base_url);
        debug!("Requesting market snapshot from {}", url);

        let per_page = SNAPSHOT_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", "usd"),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Snapshot request returned HTTP {status}"),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(CoreError::Deserialization(
                "Empty snapshot response body".into(),
            ));
        }

        let assets: Vec<Asset> = serde_json::from_str(&body).map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse market snapshot: {e}"))
        })?;

        debug!("Fetched snapshot of {} assets", assets.len());
        Ok(assets)
    }

    async fn fetch_market_chart(
        &self,
        id: &str,
        range: ChartRange,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, id);
        debug!("Requesting {} chart for {} from {}", range.label(), id, url);

        let days = range.days().to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("vs_currency", "usd"), ("days", days.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Chart request for {id} returned HTTP {status}"),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(CoreError::Deserialization(format!(
                "Empty chart response body for {id}"
            )));
        }

        let chart: MarketChartResponse = serde_json::from_str(&body).map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse chart for {id}: {e}"))
        })?;

        let points = chart
            .prices
            .into_iter()
            .map(|(timestamp_ms, price)| PricePoint { timestamp_ms, price })
            .collect();

        Ok(points)
    }
}
