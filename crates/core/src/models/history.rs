use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::range::ChartRange;

/// A single historical sample: millisecond timestamp → price in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

/// An immutable, range-scoped price series for one asset.
///
/// Points are ascending by timestamp. Once a series lands in the cache
/// it is never mutated or re-fetched for the lifetime of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    /// The range this series was fetched for.
    pub range: ChartRange,
    /// Ordered (timestamp, price) samples, ascending by timestamp.
    pub points: Vec<PricePoint>,
}

impl HistoricalSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Two-level cache of historical series: asset id → range → series.
///
/// Lookup is by exact (id, range) key match only — a hit requires BOTH
/// levels to match. Matching only the id would substitute a series from
/// the wrong range; matching only the range would leak data across
/// assets. The cache never evicts; it lives as long as the store does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryCache {
    entries: HashMap<String, HashMap<ChartRange, HistoricalSeries>>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached series for an exact (id, range) pair.
    pub fn get(&self, id: &str, range: ChartRange) -> Option<&HistoricalSeries> {
        self.entries.get(id)?.get(&range)
    }

    /// Whether an exact (id, range) pair is cached.
    pub fn contains(&self, id: &str, range: ChartRange) -> bool {
        self.get(id, range).is_some()
    }

    /// Insert a series under (id, series.range). Replaces any existing
    /// entry for the same pair (last response wins).
    pub fn insert(&mut self, id: &str, series: HistoricalSeries) {
        self.entries
            .entry(id.to_string())
            .or_default()
            .insert(series.range, series);
    }

    /// Ranges already cached for an asset, ascending by day-count.
    pub fn cached_ranges(&self, id: &str) -> Vec<ChartRange> {
        let mut ranges: Vec<ChartRange> = self
            .entries
            .get(id)
            .map(|per_range| per_range.keys().copied().collect())
            .unwrap_or_default();
        ranges.sort_by_key(|r| r.days());
        ranges
    }

    /// Number of distinct assets with at least one cached series.
    pub fn asset_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of cached (id, range) series.
    pub fn series_count(&self) -> usize {
        self.entries.values().map(|per_range| per_range.len()).sum()
    }
}
