//! Article search against the news provider.

mod api;
mod model;
mod wire;

pub use model::Article;

use crate::core::{CbClient, CbError, client::RetryConfig};

/// A builder for searching news articles by a free-text term.
pub struct NewsBuilder {
    client: CbClient,
    query: String,
    limit: Option<usize>,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for the given search term.
    pub fn new(client: &CbClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            limit: None,
            retry_override: None,
        }
    }

    /// Keeps only the first `n` articles of the provider's ordering.
    ///
    /// Applied after the fetch; the request itself is unchanged.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Overrides the client's retry policy for this call only.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and returns articles in provider order.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be sent, when the provider reports an
    /// error payload or status, or when the body has no articles array.
    #[tracing::instrument(skip(self), err, fields(query = %self.query))]
    pub async fn fetch(self) -> Result<Vec<Article>, CbError> {
        api::fetch_everything(
            &self.client,
            &self.query,
            self.limit,
            self.retry_override.as_ref(),
        )
        .await
    }
}
