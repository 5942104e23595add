//! The alert pass: compare the two latest closes, gate on a threshold, and
//! dispatch headlines by SMS when the move is large enough.

mod report;

pub use report::{ChangeReport, message_bodies};

use crate::{
    change,
    core::{CbClient, CbError},
    news::NewsBuilder,
    prices::DailySeriesBuilder,
    sms::{MessageReceipt, SmsBuilder},
};

/// Percentage move that must be strictly exceeded before anything is sent.
pub const DEFAULT_THRESHOLD_PCT: f64 = 5.0;

/// How many headlines go out per triggered alert.
pub const DEFAULT_MAX_HEADLINES: usize = 3;

/// Result of one alert pass.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// Fewer than two sessions came back; nothing to compare.
    InsufficientData { available: usize },
    /// The move stayed within the threshold; nothing was sent.
    Held { report: ChangeReport },
    /// The move exceeded the threshold and headlines went out.
    Dispatched {
        report: ChangeReport,
        receipts: Vec<MessageReceipt>,
    },
}

/// Runs the closing-price check for one symbol and, when the move clears
/// the threshold, turns the top headlines into SMS messages.
///
/// The pass is strictly sequential: prices, comparison, gate, news,
/// dispatch. Each call completes before the next begins, and a pass that
/// ends early makes no further provider calls.
pub struct AlertEngine {
    client: CbClient,
    symbol: String,
    company: String,
    threshold_pct: f64,
    max_headlines: usize,
    route: Option<(String, String)>,
}

impl AlertEngine {
    /// Creates an engine for `symbol`, using `company` as the news search
    /// term.
    pub fn new(client: &CbClient, symbol: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            company: company.into(),
            threshold_pct: DEFAULT_THRESHOLD_PCT,
            max_headlines: DEFAULT_MAX_HEADLINES,
            route: None,
        }
    }

    /// Overrides the percentage threshold that trips the alert.
    #[must_use]
    pub const fn threshold_pct(mut self, pct: f64) -> Self {
        self.threshold_pct = pct;
        self
    }

    /// Overrides how many headlines are dispatched per alert.
    #[must_use]
    pub const fn max_headlines(mut self, n: usize) -> Self {
        self.max_headlines = n;
        self
    }

    /// Sets the SMS sender and recipient.
    ///
    /// A pass without a route still runs; it fails only if the gate trips
    /// and a dispatch is actually attempted.
    #[must_use]
    pub fn sms_route(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.route = Some((from.into(), to.into()));
        self
    }

    /// Executes one alert pass.
    ///
    /// # Errors
    ///
    /// Propagates any provider failure as-is; there is no recovery beyond
    /// the transport retry policy.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn run(&self) -> Result<AlertOutcome, CbError> {
        let series = DailySeriesBuilder::new(&self.client, self.symbol.as_str())
            .fetch()
            .await?;

        let Some((latest, previous)) = series.latest_pair() else {
            tracing::info!(available = series.len(), "not enough sessions to compare");
            return Ok(AlertOutcome::InsufficientData {
                available: series.len(),
            });
        };

        let change = change::percentage_change(latest.close, previous.close)?;
        tracing::info!(
            percent = change.percent,
            delta = change.delta,
            "daily change computed"
        );

        let report = ChangeReport {
            symbol: self.symbol.clone(),
            company: self.company.clone(),
            latest: latest.clone(),
            previous: previous.clone(),
            change,
        };

        if change.percent <= self.threshold_pct {
            tracing::info!(threshold = self.threshold_pct, "move within threshold, holding");
            return Ok(AlertOutcome::Held { report });
        }
        tracing::info!(
            threshold = self.threshold_pct,
            "move past threshold, fetching headlines"
        );

        let articles = NewsBuilder::new(&self.client, self.company.as_str())
            .limit(self.max_headlines)
            .fetch()
            .await?;

        let (from, to) = self.route.as_ref().ok_or_else(|| {
            CbError::Auth("sms route (sender, recipient) is not configured".into())
        })?;

        let mut receipts = Vec::with_capacity(articles.len());
        for body in report::message_bodies(&articles) {
            let receipt = SmsBuilder::new(&self.client)
                .route(from.as_str(), to.as_str())
                .body(body)
                .send()
                .await?;
            receipts.push(receipt);
        }

        Ok(AlertOutcome::Dispatched { report, receipts })
    }
}
