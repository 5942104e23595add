//! Daily price series from the market-data provider.

mod api;
mod model;
mod wire;

pub use model::{DailyBar, PriceSeries, SeriesMeta};

use crate::core::{CbClient, CbError, client::RetryConfig};

/// How much history the provider should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSize {
    /// The latest ~100 sessions.
    Compact,
    /// The full listing history.
    Full,
}

impl OutputSize {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

/// A builder for fetching a symbol's daily price series.
pub struct DailySeriesBuilder {
    client: CbClient,
    symbol: String,
    output_size: Option<OutputSize>,
    retry_override: Option<RetryConfig>,
}

impl DailySeriesBuilder {
    /// Creates a new `DailySeriesBuilder` for the given symbol.
    pub fn new(client: &CbClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            output_size: None,
            retry_override: None,
        }
    }

    /// Asks the provider for a compact or full series.
    ///
    /// When unset the parameter is omitted and the provider default applies.
    #[must_use]
    pub const fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = Some(size);
        self
    }

    /// Overrides the client's retry policy for this call only.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and decodes the daily series, most recent
    /// session first.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, when the provider answers
    /// with an error payload or status, or when the body is missing the
    /// series data.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<PriceSeries, CbError> {
        api::fetch_daily(
            &self.client,
            &self.symbol,
            self.output_size,
            self.retry_override.as_ref(),
        )
        .await
    }
}
