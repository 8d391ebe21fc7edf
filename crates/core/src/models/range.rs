use serde::{Deserialize, Serialize};

/// The fixed set of time ranges a historical series can be requested for.
///
/// Each range maps to the day-count the provider's chart endpoint expects.
/// The default is `Week` — the range the detail view opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartRange {
    /// 1 day
    Day,
    /// 7 days
    #[default]
    Week,
    /// 30 days
    Month,
    /// 90 days
    Quarter,
    /// 365 days
    Year,
}

impl ChartRange {
    /// All supported ranges, ascending by day-count.
    pub const ALL: [ChartRange; 5] = [
        ChartRange::Day,
        ChartRange::Week,
        ChartRange::Month,
        ChartRange::Quarter,
        ChartRange::Year,
    ];

    /// Day-count sent to the provider's chart endpoint.
    pub fn days(&self) -> u32 {
        match self {
            ChartRange::Day => 1,
            ChartRange::Week => 7,
            ChartRange::Month => 30,
            ChartRange::Quarter => 90,
            ChartRange::Year => 365,
        }
    }

    /// Reverse lookup from a day-count. Returns `None` for unsupported counts.
    pub fn from_days(days: u32) -> Option<ChartRange> {
        ChartRange::ALL.into_iter().find(|r| r.days() == days)
    }

    /// Short label as rendered by the range selector ("1D", "7D", ...).
    pub fn label(&self) -> &'static str {
        match self {
            ChartRange::Day => "1D",
            ChartRange::Week => "7D",
            ChartRange::Month => "1M",
            ChartRange::Quarter => "3M",
            ChartRange::Year => "YTD",
        }
    }
}

impl std::fmt::Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
