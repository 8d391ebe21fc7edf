use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::providers::traits::MarketDataProvider;

/// Fetches the ranked market snapshot and validates it against the data
/// model before it is allowed to replace the store's asset list.
///
/// Validation rules:
/// - asset ids must be unique within one snapshot;
/// - prices and market caps must be finite and non-negative.
/// A snapshot that violates either is rejected wholesale — the store
/// keeps serving the previous one.
pub struct SnapshotService {
    provider: Arc<dyn MarketDataProvider>,
}

impl SnapshotService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the current top assets, ranked by market cap descending,
    /// in provider order.
    pub async fn fetch_ranked(&self) -> Result<Vec<Asset>, CoreError> {
        let assets = self.provider.fetch_snapshot().await?;

        let mut seen = HashSet::new();
        for asset in &assets {
            if !seen.insert(asset.id.as_str()) {
                return Err(CoreError::InvalidSnapshot(format!(
                    "duplicate asset id '{}'",
                    asset.id
                )));
            }
            if !asset.current_price.is_finite() || asset.current_price < 0.0 {
                return Err(CoreError::InvalidSnapshot(format!(
                    "asset '{}' has invalid price {}",
                    asset.id, asset.current_price
                )));
            }
            if !asset.market_cap.is_finite() || asset.market_cap < 0.0 {
                return Err(CoreError::InvalidSnapshot(format!(
                    "asset '{}' has invalid market cap {}",
                    asset.id, asset.market_cap
                )));
            }
        }

        debug!(
            "Snapshot from {} validated: {} assets",
            self.provider.name(),
            assets.len()
        );
        Ok(assets)
    }
}
