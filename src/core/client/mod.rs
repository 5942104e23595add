//! Public client surface and its builder.
//!
//! Internals are split into `retry` (transport policy) and `constants`
//! (default endpoints plus the outbound user agent).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use std::time::Duration;

use url::Url;

use crate::core::error::CbError;
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_PRICES, DEFAULT_BASE_SMS, USER_AGENT};

/// Basic-auth credential pair for the messaging provider.
#[derive(Clone)]
pub(crate) struct SmsAuth {
    pub(crate) account_sid: String,
    pub(crate) auth_token: String,
}

impl std::fmt::Debug for SmsAuth {
    // The token stays out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsAuth")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Shared HTTP client holding endpoints, credentials and the retry policy.
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Clone)]
pub struct CbClient {
    http: reqwest::Client,
    base_prices: Url,
    base_news: Url,
    base_sms: Url,
    alpha_key: Option<String>,
    news_key: Option<String>,
    sms_auth: Option<SmsAuth>,
    retry: RetryConfig,
}

impl std::fmt::Debug for CbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CbClient")
            .field("base_prices", &self.base_prices.as_str())
            .field("base_news", &self.base_news.as_str())
            .field("base_sms", &self.base_sms.as_str())
            .field("alpha_key", &self.alpha_key.as_ref().map(|_| "<redacted>"))
            .field("news_key", &self.news_key.as_ref().map(|_| "<redacted>"))
            .field("sms_auth", &self.sms_auth)
            .finish_non_exhaustive()
    }
}

impl Default for CbClient {
    fn default() -> Self {
        Self::builder().build().expect("default client construction")
    }
}

impl CbClient {
    /// Starts building a client with default endpoints and retry policy.
    pub fn builder() -> CbClientBuilder {
        CbClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn base_prices(&self) -> &Url {
        &self.base_prices
    }

    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }

    pub(crate) fn base_sms(&self) -> &Url {
        &self.base_sms
    }

    pub(crate) fn alpha_key(&self) -> Result<&str, CbError> {
        self.alpha_key
            .as_deref()
            .ok_or_else(|| CbError::Auth("market data API key is not configured".into()))
    }

    pub(crate) fn news_key(&self) -> Result<&str, CbError> {
        self.news_key
            .as_deref()
            .ok_or_else(|| CbError::Auth("news API key is not configured".into()))
    }

    pub(crate) fn sms_auth(&self) -> Result<&SmsAuth, CbError> {
        self.sms_auth
            .as_ref()
            .ok_or_else(|| CbError::Auth("messaging credentials are not configured".into()))
    }

    /// Sends a request, replaying it on transient failures per the retry
    /// policy (the per-call override wins over the client's own).
    ///
    /// A response whose status is retriable is returned as-is once attempts
    /// are exhausted; callers still map non-success statuses themselves.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        override_cfg: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, CbError> {
        let cfg = override_cfg.unwrap_or(&self.retry);

        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            // A request whose body cannot be replayed gets exactly one shot.
            let Some(this_try) = req.try_clone() else {
                return Ok(req.send().await?);
            };

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt >= cfg.max_retries || !cfg.retry_on_status.contains(&status) {
                        return Ok(resp);
                    }
                    tracing::debug!(status, attempt, "retrying after response status");
                }
                Err(err) => {
                    let transient = (cfg.retry_on_timeout && err.is_timeout())
                        || (cfg.retry_on_connect && err.is_connect());
                    if attempt >= cfg.max_retries || !transient {
                        return Err(err.into());
                    }
                    tracing::debug!(error = %err, attempt, "retrying after transport error");
                }
            }

            attempt += 1;
            tokio::time::sleep(cfg.backoff.delay_for(attempt)).await;
        }
    }
}

/// Builder for [`CbClient`].
#[derive(Default)]
pub struct CbClientBuilder {
    user_agent: Option<String>,
    base_prices: Option<Url>,
    base_news: Option<Url>,
    base_sms: Option<Url>,
    alpha_key: Option<String>,
    news_key: Option<String>,
    sms_auth: Option<SmsAuth>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl CbClientBuilder {
    /// Overrides the outbound `User-Agent`.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Overrides the market-data query endpoint. Tests point this at a
    /// local mock server.
    pub fn base_prices(mut self, url: Url) -> Self {
        self.base_prices = Some(url);
        self
    }

    /// Overrides the news endpoint base.
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Overrides the messaging endpoint base.
    pub fn base_sms(mut self, url: Url) -> Self {
        self.base_sms = Some(url);
        self
    }

    /// API key for the market-data provider.
    pub fn alpha_vantage_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_key = Some(key.into());
        self
    }

    /// API key for the news provider.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_key = Some(key.into());
        self
    }

    /// Account SID and auth token for the messaging provider.
    pub fn messaging_auth(
        mut self,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        self.sms_auth = Some(SmsAuth {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        });
        self
    }

    /// Total per-request timeout.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Timeout for establishing the connection.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Client-wide retry policy. Individual calls may still override it.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if a default endpoint fails to parse or the underlying HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<CbClient, CbError> {
        let base_prices = match self.base_prices {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PRICES)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_sms = match self.base_sms {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SMS)?,
        };

        let mut http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            http = http.timeout(t);
        }
        if let Some(t) = self.connect_timeout {
            http = http.connect_timeout(t);
        }

        Ok(CbClient {
            http: http.build()?,
            base_prices,
            base_news,
            base_sms,
            alpha_key: self.alpha_key,
            news_key: self.news_key,
            sms_auth: self.sms_auth,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
