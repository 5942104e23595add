use chrono::NaiveDate;
use serde::Serialize;

/// One trading session from the daily series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBar {
    /// Session date, in the exchange's local calendar.
    pub date: NaiveDate,
    /// Closing price. Always present; a session without a close is
    /// rejected during decoding.
    pub close: f64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<u64>,
}

/// Series metadata echoed back by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesMeta {
    pub symbol: Option<String>,
    pub last_refreshed: Option<String>,
    pub time_zone: Option<String>,
}

/// A symbol's daily price series, most recent session first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    /// The symbol the series was requested for.
    pub symbol: String,
    pub meta: Option<SeriesMeta>,
    pub bars: Vec<DailyBar>,
}

impl PriceSeries {
    /// The two most recent sessions as `(latest, previous)`.
    ///
    /// Returns `None` when fewer than two sessions are available.
    #[must_use]
    pub fn latest_pair(&self) -> Option<(&DailyBar, &DailyBar)> {
        match self.bars.as_slice() {
            [latest, previous, ..] => Some((latest, previous)),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
