use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked cryptocurrency as reported by the market snapshot.
///
/// Field names match the provider's wire shape, so a snapshot row
/// deserializes directly into this struct. The whole asset list is
/// replaced wholesale on every successful refresh — individual records
/// are never merged or patched.
///
/// **Equality** covers every field: two assets are equal only if they
/// carry the same valuation, which is what snapshot-replacement tests
/// care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Opaque stable identifier (e.g., "bitcoin"). Unique within a snapshot.
    pub id: String,

    /// Ticker symbol as reported by the provider, usually lowercase (e.g., "btc").
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin").
    pub name: String,

    /// Icon URL. Presentation only.
    pub image: String,

    /// Latest price in USD. Non-negative.
    pub current_price: f64,

    /// Signed 24-hour change, in percent.
    pub price_change_percentage_24h: f64,

    /// Market capitalization in USD. Non-negative.
    pub market_cap: f64,

    /// Timestamp of the provider's valuation.
    pub last_updated: DateTime<Utc>,
}

impl Asset {
    /// Case-insensitive match against name and symbol, used by the
    /// search filter projection.
    pub fn matches(&self, term: &str) -> bool {
        let q = term.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.symbol.to_lowercase().contains(&q)
    }
}
