use serde::Serialize;

/// Provider acknowledgement for one dispatched message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageReceipt {
    /// Provider-assigned message identifier.
    pub sid: String,
    /// Delivery state at acceptance time, e.g. "queued".
    pub status: Option<String>,
}
