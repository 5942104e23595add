//! Outbound SMS via the messaging provider's REST API.

mod api;
mod model;
mod wire;

pub use model::MessageReceipt;

use crate::core::{CbClient, CbError, client::RetryConfig};

/// A builder for dispatching a single SMS message.
pub struct SmsBuilder {
    client: CbClient,
    from: Option<String>,
    to: Option<String>,
    body: Option<String>,
    retry_override: Option<RetryConfig>,
}

impl SmsBuilder {
    /// Creates a new `SmsBuilder`.
    pub fn new(client: &CbClient) -> Self {
        Self {
            client: client.clone(),
            from: None,
            to: None,
            body: None,
            retry_override: None,
        }
    }

    /// Sets the sender and recipient numbers.
    #[must_use]
    pub fn route(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    /// Sets the message text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Overrides the client's retry policy for this call only.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Dispatches the message and returns the provider's receipt.
    ///
    /// # Errors
    ///
    /// Fails when the route or body is unset, when messaging credentials
    /// are missing, or when the provider rejects the request.
    #[tracing::instrument(skip(self), err)]
    pub async fn send(self) -> Result<MessageReceipt, CbError> {
        let from = self
            .from
            .ok_or_else(|| CbError::Data("message sender not set".into()))?;
        let to = self
            .to
            .ok_or_else(|| CbError::Data("message recipient not set".into()))?;
        let body = self
            .body
            .ok_or_else(|| CbError::Data("message body not set".into()))?;
        api::send_message(&self.client, &from, &to, &body, self.retry_override.as_ref()).await
    }
}
